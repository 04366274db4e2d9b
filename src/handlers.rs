use crate::display::{DisplayState, LOAD_ERROR_MESSAGE};
use crate::errors::{AppError, StoreError};
use crate::models::{HealthResponse, Quote, QuoteDocument};
use crate::state::AppState;
use crate::store::{date_key, load_store, parse_date_key, QuoteStore};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{NaiveDate, SecondsFormat, Utc};
use tracing::{info, warn};

pub const ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "GET /api/quotes",
    "GET /api/quotes/daily",
    "GET /api/quotes/:date",
];

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let now = Utc::now();
    let today = now.date_naive();
    let mut display = DisplayState::new();

    let daily = load_store(&state.quotes_path)
        .await
        .and_then(|store| store.daily_quote_at(today).map(|daily| daily.quote.clone()));
    match daily {
        Ok(quote) => {
            display.show_quote(quote);
        }
        Err(err) => {
            warn!("rendering index for {} without a quote: {err}", date_key(today));
            display.show_error(LOAD_ERROR_MESSAGE);
        }
    }

    Html(render_index(&display, now))
}

pub async fn get_daily_quote(State(state): State<AppState>) -> Result<Json<Quote>, AppError> {
    let store = load_store(&state.quotes_path).await?;
    let quote = daily_quote_for(&store, Utc::now().date_naive())?;
    Ok(Json(quote))
}

/// The quote served for `today`, logging whether it is a fallback. The same
/// date drives both the lookup and the log lines.
fn daily_quote_for(store: &QuoteStore, today: NaiveDate) -> Result<Quote, StoreError> {
    let key = date_key(today);
    let daily = store.daily_quote_at(today).inspect_err(|err| {
        warn!("no quote for {key}: {err}");
    })?;

    if daily.is_fallback {
        warn!("no quote found for {key}, using fallback from {}", daily.date);
    } else {
        info!("serving quote for {key}");
    }

    Ok(daily.quote.clone())
}

pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<QuoteDocument>, AppError> {
    let store = load_store(&state.quotes_path).await?;
    Ok(Json(QuoteDocument {
        quotes: Some(store),
    }))
}

pub async fn get_quote_for_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Quote>, AppError> {
    if parse_date_key(&date).is_none() {
        return Err(AppError::bad_request("date must be formatted as YYYY-MM-DD"));
    }

    let store = load_store(&state.quotes_path).await?;
    match store.quote_for(&date) {
        Some(quote) => Ok(Json(quote.clone())),
        None if store.is_empty() => Err(StoreError::NoQuotes.into()),
        None => Err(AppError::not_found(format!("No quote for {date}"))),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Daily quote API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

pub async fn not_found() -> AppError {
    AppError::not_found("Endpoint not found")
}
