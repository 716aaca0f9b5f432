//! Entity models and their request schemas.
//!
//! Each entity contributes three types: the persisted model (one table
//! row), a creation schema with every field required, and an update
//! schema where every field is optional. The [`Entity`] trait ties the
//! three together and injects the per-entity behavior the generic
//! repository cannot express itself: the INSERT mapping the creation
//! schema to a stored row, the in-memory merge of an update schema onto
//! a loaded model, and the UPDATE persisting the merged row.

pub mod order;
pub mod product;
pub mod user;

pub use order::{CreateOrder, Order, UpdateOrder};
pub use product::{CreateProduct, Product, UpdateProduct};
pub use user::{CreateUser, UpdateUser, User};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

#[async_trait]
pub trait Entity:
    for<'r> FromRow<'r, SqliteRow> + Serialize + Unpin + Send + Sync + 'static
{
    type Create: DeserializeOwned + Send + Sync + 'static;
    type Update: DeserializeOwned + Send + Sync + 'static;

    /// Table name, interpolated into the repository's queries.
    const TABLE: &'static str;
    /// Display name used in client-facing messages ("User not found").
    const NAME: &'static str;

    /// Map the creation schema into one INSERT and return the stored
    /// row, including the generated id.
    async fn insert(pool: &SqlitePool, input: Self::Create) -> sqlx::Result<Self>;

    /// Overwrite the fields set on `input`; fields left unset keep
    /// their current values.
    fn merge(&mut self, input: Self::Update);

    /// Persist the current field values of this row with one UPDATE.
    async fn save(&self, pool: &SqlitePool) -> sqlx::Result<()>;
}
