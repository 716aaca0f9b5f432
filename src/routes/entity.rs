//! Entity CRUD routes.
//!
//! One router shape per entity, instantiated at compile time; the
//! handlers carry the entity type, so there is no runtime path-segment
//! dispatch.

use axum::{routing::get, Router};

use crate::entity::{Entity, Order, Product, User};
use crate::handlers::entity::{create, list, read, remove, update};
use crate::state::AppState;

pub fn entity_routes<E: Entity>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/:id", get(read::<E>).put(update::<E>).delete(remove::<E>))
}

/// The full CRUD surface: /users, /products, /orders.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/users", entity_routes::<User>())
        .nest("/products", entity_routes::<Product>())
        .nest("/orders", entity_routes::<Order>())
        .with_state(state)
}
