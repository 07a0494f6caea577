pub mod database;
pub mod impls;
pub mod model;

pub use database::{Database, MIGRATOR};
pub use model::profile::{Profile, ProfileUpdate};
