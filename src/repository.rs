//! Generic repository: the four CRUD operations, written once.
//!
//! `Repository<E>` holds no state and knows nothing about any concrete
//! entity; table names come from [`Entity::TABLE`] and the typed field
//! mappings from the entity's own `insert`/`merge`/`save`. Every
//! operation is a single call sequence against the pool (each call
//! checks a connection out for just its own duration) and is immediately
//! durable; there is no batching, retrying, or cross-call state.

use std::marker::PhantomData;

use sqlx::SqlitePool;

use crate::entity::Entity;
use crate::error::AppError;

pub struct Repository<E> {
    _entity: PhantomData<E>,
}

impl<E: Entity> Repository<E> {
    /// Insert `input` and return the stored row with its generated id.
    /// Constraint violations (duplicate email, dangling order
    /// reference) surface as [`AppError::Conflict`].
    pub async fn create(pool: &SqlitePool, input: E::Create) -> Result<E, AppError> {
        Ok(E::insert(pool, input).await?)
    }

    /// Point lookup by id. Absence is `Ok(None)`, never an error.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<E>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", E::TABLE);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// All rows ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<E>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", E::TABLE);
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Overwrite the fields set on `input` onto the already-fetched
    /// `existing` row, persist, and return the updated model. Fields
    /// left unset on `input` are untouched.
    pub async fn update(
        pool: &SqlitePool,
        mut existing: E,
        input: E::Update,
    ) -> Result<E, AppError> {
        existing.merge(input);
        existing.save(pool).await?;
        Ok(existing)
    }

    /// Delete by id, returning the deleted row's last known field
    /// values, or `None` if no such row exists.
    pub async fn remove(pool: &SqlitePool, id: i64) -> Result<Option<E>, AppError> {
        match Self::get(pool, id).await? {
            Some(row) => {
                let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
                sqlx::query(&sql).bind(id).execute(pool).await?;
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }
}
