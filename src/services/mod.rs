// Service exports
pub mod catalog;
pub mod postgres;
pub mod push;

pub use catalog::CachedSportCatalog;
pub use postgres::PostgresClient;
pub use push::{PushClient, PushError};
