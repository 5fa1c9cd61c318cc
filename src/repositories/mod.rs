pub mod exchange_rate_log;
