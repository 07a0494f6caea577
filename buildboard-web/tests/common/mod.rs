//! Shared setup for tests that need a live PostgreSQL.
//!
//! Each test gets its own schema with migrations applied, so tests can run in
//! parallel against one database. Tests are skipped when `DATABASE_URL` is unset.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;
use uuid::Uuid;

use buildboard_database::{Database, MIGRATOR};

pub struct TestDatabase {
    pub db: Database,
    admin: PgPool,
    schema: String,
}

impl TestDatabase {
    pub async fn connect() -> Option<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                eprintln!("DATABASE_URL not set; skipping database test");
                return None;
            }
        };

        let _ = rustls::crypto::ring::default_provider().install_default();

        let schema = format!("buildboard_test_{}", Uuid::new_v4().simple());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect admin pool");
        admin
            .execute(format!("CREATE SCHEMA {schema}").as_str())
            .await
            .expect("create test schema");

        let search_path = schema.clone();
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let statement = format!("SET search_path TO {search_path}");
                Box::pin(async move {
                    conn.execute(statement.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("connect test pool");

        MIGRATOR.run(&pool).await.expect("run migrations");

        Some(Self {
            db: Database::new(pool),
            admin,
            schema,
        })
    }

    pub async fn seed(&self, username: &str, full_name: Option<&str>, score: Option<i64>) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO profiles (id, username, full_name, total_score) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(username)
        .bind(full_name)
        .bind(score)
        .execute(self.db.pool())
        .await
        .expect("seed profile");
        id
    }

    pub async fn drop_schema(self) {
        self.db.pool().close().await;
        let _ = self
            .admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await;
    }
}
