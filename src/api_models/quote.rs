use serde::{Deserialize, Serialize};

/// Upstream payload from the awesomeapi quote endpoint. The whole object is
/// keyed by the currency pair; denying unknown shapes here keeps a malformed
/// upstream body from ever looking like a valid quote.
#[derive(Debug, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: UsdBrlQuote,
}

/// The upstream emits every numeric-looking field as text; they are carried
/// as-is, no numeric parsing anywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdBrlQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Fixed two-field reply for `GET /cotacao`.
#[derive(Debug, Serialize)]
pub struct CotacaoResponse {
    pub name: &'static str,
    pub value: String,
}

impl CotacaoResponse {
    pub fn from_quote(quote: &UsdBrlQuote) -> Self {
        Self {
            name: "Dólar",
            value: quote.bid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.09",
            "low": "5.01",
            "varBid": "0.02",
            "pctChange": "0.4",
            "bid": "5.05",
            "ask": "5.06",
            "timestamp": "1693310400",
            "create_date": "2023-08-29 09:00:00"
        }
    }"#;

    #[test]
    fn decodes_usdbrl_envelope() {
        let envelope: QuoteEnvelope = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(envelope.usdbrl.code, "USD");
        assert_eq!(envelope.usdbrl.codein, "BRL");
        assert_eq!(envelope.usdbrl.bid, "5.05");
        assert_eq!(envelope.usdbrl.var_bid, "0.02");
        assert_eq!(envelope.usdbrl.pct_change, "0.4");
        assert_eq!(envelope.usdbrl.create_date, "2023-08-29 09:00:00");
    }

    #[test]
    fn rejects_wrong_shape() {
        let missing_pair = r#"{"EURBRL": {"code": "EUR"}}"#;
        assert!(serde_json::from_str::<QuoteEnvelope>(missing_pair).is_err());

        let missing_field = r#"{"USDBRL": {"code": "USD", "bid": "5.05"}}"#;
        assert!(serde_json::from_str::<QuoteEnvelope>(missing_field).is_err());
    }

    #[test]
    fn reply_serializes_to_fixed_shape() {
        let envelope: QuoteEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let reply = CotacaoResponse::from_quote(&envelope.usdbrl);
        let body = serde_json::to_string(&reply).unwrap();
        assert_eq!(body, r#"{"name":"Dólar","value":"5.05"}"#);
    }
}
