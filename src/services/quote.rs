use reqwest::Client;
use thiserror::Error;
use tokio::time::Duration;

use crate::api_models::quote::{QuoteEnvelope, UsdBrlQuote};

/// Hard bound on the whole upstream call, connect through body read. The
/// serving endpoint must stay responsive even when the quote API is slow.
pub const FETCH_DEADLINE: Duration = Duration::from_millis(200);

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("upstream call exceeded {}ms", FETCH_DEADLINE.as_millis())]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for QuoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            QuoteError::Timeout
        } else {
            QuoteError::Transport(e)
        }
    }
}

/// Fetches the current USD/BRL quote. Exactly one outbound attempt per
/// invocation; no retry, no backoff.
pub async fn fetch_usd_brl(client: &Client, url: &str) -> Result<UsdBrlQuote, QuoteError> {
    let resp = client
        .get(url)
        .timeout(FETCH_DEADLINE)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(QuoteError::BadStatus(status.as_u16()));
    }

    let body = resp.text().await?;
    let envelope: QuoteEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.usdbrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.09","low":"5.01","varBid":"0.02","pctChange":"0.4","bid":"5.05","ask":"5.06","timestamp":"1693310400","create_date":"2023-08-29 09:00:00"}}"#;

    async fn mock_upstream(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/last/USD-BRL"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[test_log::test(tokio::test)]
    async fn returns_quote_on_well_formed_payload() {
        let server = mock_upstream(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let url = format!("{}/json/last/USD-BRL", server.uri());

        let quote = fetch_usd_brl(&Client::new(), &url).await.unwrap();
        assert_eq!(quote.bid, "5.05");
        assert_eq!(quote.code, "USD");
    }

    #[test_log::test(tokio::test)]
    async fn malformed_body_is_a_decode_error() {
        let server = mock_upstream(ResponseTemplate::new(200).set_body_string("not json")).await;
        let url = format!("{}/json/last/USD-BRL", server.uri());

        let err = fetch_usd_brl(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)));
    }

    #[test_log::test(tokio::test)]
    async fn slow_upstream_times_out_within_the_deadline() {
        let template = ResponseTemplate::new(200)
            .set_body_string(SAMPLE)
            .set_delay(Duration::from_millis(800));
        let server = mock_upstream(template).await;
        let url = format!("{}/json/last/USD-BRL", server.uri());

        let started = std::time::Instant::now();
        let err = fetch_usd_brl(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, QuoteError::Timeout));
        assert!(started.elapsed() < Duration::from_millis(600));
    }

    #[test_log::test(tokio::test)]
    async fn refused_connection_is_a_transport_error() {
        // Nothing listens here.
        let err = fetch_usd_brl(&Client::new(), "http://127.0.0.1:1/json/last/USD-BRL")
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::Transport(_)));
    }

    #[test_log::test(tokio::test)]
    async fn non_success_status_is_surfaced() {
        let server = mock_upstream(ResponseTemplate::new(503)).await;
        let url = format!("{}/json/last/USD-BRL", server.uri());

        let err = fetch_usd_brl(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, QuoteError::BadStatus(503)));
    }
}
