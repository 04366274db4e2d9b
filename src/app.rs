use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/quotes", get(handlers::list_quotes))
        .route("/api/quotes/daily", get(handlers::get_daily_quote))
        .route("/api/quotes/:date", get(handlers::get_quote_for_date))
        .fallback(handlers::not_found)
        .with_state(state)
}
