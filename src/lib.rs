//! Shopkit: typed CRUD REST backend for a small shop, backed by SQLite.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use entity::Entity;
pub use error::AppError;
pub use repository::Repository;
pub use response::Detail;
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables};
