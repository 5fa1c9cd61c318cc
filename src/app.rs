use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::utils::config::ServerConfig;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub http_client: reqwest::Client,
    pub quote_url: String,
}

/// Builds the application router, opening the persistence pool once at
/// startup. Connections are established lazily so a sink that is down at
/// boot does not prevent the endpoint from serving.
pub fn build_app(cfg: &ServerConfig) -> Router {
    let manager = ConnectionManager::<PgConnection>::new(&cfg.database_url);
    let db_pool = Pool::builder().build_unchecked(manager);

    build_app_with_pool(db_pool, &cfg.quote_url)
}

pub fn build_app_with_pool(db_pool: DbPool, quote_url: &str) -> Router {
    let state = AppState {
        db_pool,
        http_client: reqwest::Client::new(),
        quote_url: quote_url.to_string(),
    };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
