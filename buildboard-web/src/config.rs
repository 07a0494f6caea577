use std::env;
use std::net::SocketAddr;

use anyhow::Context as _;
use axum::http::HeaderName;

use buildboard_core::DEFAULT_AUTH_USER_HEADER;
use buildboard_database::impls::profiles::DEFAULT_LEADERBOARD_LIMIT;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    pub leaderboard_limit: u32,
    pub auth_user_header: String,
    pub auto_run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let text = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let database_url = text("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = text("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        let auth_user_header = text("AUTH_USER_HEADER")
            .unwrap_or_else(|| DEFAULT_AUTH_USER_HEADER.to_owned())
            .to_ascii_lowercase();
        HeaderName::from_bytes(auth_user_header.as_bytes())
            .context("AUTH_USER_HEADER is not a valid header name")?;

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections: parse_u32(
                text("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )
            .max(1),
            leaderboard_limit: parse_u32(text("LEADERBOARD_LIMIT"), DEFAULT_LEADERBOARD_LIMIT)
                .max(1),
            auth_user_header,
            auto_run_migrations: parse_bool(text("AUTO_RUN_MIGRATIONS"), true),
        })
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    match value {
        Some(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

fn parse_u32(value: Option<String>, default: u32) -> u32 {
    value
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}
