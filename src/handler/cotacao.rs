use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::time::Duration;

use crate::api_models::quote::{CotacaoResponse, UsdBrlQuote};
use crate::app::AppState;
use crate::models::NewExchangeRateLog;
use crate::repositories::exchange_rate_log;
use crate::services::quote::fetch_usd_brl;

/// Deadline for the log write, independent of the fetch deadline.
const LOG_DEADLINE: Duration = Duration::from_millis(20);

/// `GET /cotacao`. Fetch the quote, log it best-effort, reply with the bid.
/// Any fetch or encode failure is a 400 with an empty body; the caller never
/// sees upstream error detail.
pub async fn get_cotacao(State(state): State<AppState>) -> Response {
    let quote = match fetch_usd_brl(&state.http_client, &state.quote_url).await {
        Ok(quote) => quote,
        Err(e) => {
            tracing::error!("failed to fetch USD/BRL quote: {e}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    // Persistence failures never change the HTTP outcome.
    persist_quote(&state, &quote).await;

    let reply = CotacaoResponse::from_quote(&quote);
    match serde_json::to_string(&reply) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode reply: {e}");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// Writes one log record for a fetched quote. The diesel insert runs on the
/// blocking pool under its own deadline; on timeout the in-flight write is
/// abandoned, not joined.
async fn persist_quote(state: &AppState, quote: &UsdBrlQuote) {
    let pool = state.db_pool.clone();
    let record = NewExchangeRateLog {
        value: quote.bid.clone(),
        coin_type: quote.code.clone(),
    };

    let write = tokio::task::spawn_blocking(move || -> anyhow::Result<i32> {
        let mut conn = pool.get()?;
        exchange_rate_log::ensure_table(&mut conn)?;
        let record_id = exchange_rate_log::create(&mut conn, &record)?;
        Ok(record_id)
    });

    match tokio::time::timeout(LOG_DEADLINE, write).await {
        Ok(Ok(Ok(record_id))) => {
            tracing::debug!("logged quote as record {record_id}");
        }
        Ok(Ok(Err(e))) => {
            tracing::warn!("failed to persist quote log: {e}");
        }
        Ok(Err(e)) => {
            tracing::warn!("quote log task failed to run: {e}");
        }
        Err(_) => {
            tracing::warn!(
                "quote log write exceeded {}ms, abandoned",
                LOG_DEADLINE.as_millis()
            );
        }
    }
}
