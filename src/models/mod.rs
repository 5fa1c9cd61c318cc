pub mod exchange_rate_logs;

pub use exchange_rate_logs::{ExchangeRateLog, NewExchangeRateLog};
