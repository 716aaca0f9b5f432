//! Server binary: connects the database, creates tables on first start,
//! and serves the CRUD API.

use axum::{extract::Request, Router, ServiceExt};
use shopkit::{api_routes, common_routes, connect, ensure_tables, AppState};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tower::Layer as _;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("server=info,shopkit=info,tower_http=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shopkit.db".into());
    let pool = connect(&database_url).await?;
    ensure_tables(&pool).await?;

    let state = AppState { pool };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Clients send trailing slashes (POST /users/); axum treats /users
    // and /users/ as distinct paths, so trim before routing.
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
