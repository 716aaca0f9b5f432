//! Entity CRUD handlers: create, read, update, delete, list.
//!
//! One generic handler set, instantiated per entity type by the route
//! layer. Malformed or incomplete bodies are rejected by the Json
//! extractor before any of these run; the repository never sees them.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::entity::Entity;
use crate::error::AppError;
use crate::repository::Repository;
use crate::response::{detail, Detail};
use crate::state::AppState;

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Json(input): Json<E::Create>,
) -> Result<Json<E>, AppError> {
    let created = Repository::<E>::create(&state.pool, input).await?;
    Ok(Json(created))
}

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError> {
    let rows = Repository::<E>::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<E>, AppError> {
    let row = Repository::<E>::get(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(E::NAME))?;
    Ok(Json(row))
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<E::Update>,
) -> Result<Json<E>, AppError> {
    let existing = Repository::<E>::get(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(E::NAME))?;
    let updated = Repository::<E>::update(&state.pool, existing, input).await?;
    Ok(Json(updated))
}

pub async fn remove<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Detail>, AppError> {
    match Repository::<E>::remove(&state.pool, id).await? {
        Some(_) => Ok(Json(detail(format!("{} deleted", E::NAME)))),
        None => Err(AppError::NotFound(E::NAME)),
    }
}
