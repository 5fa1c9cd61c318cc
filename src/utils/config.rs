use std::net::SocketAddr;

const DEFAULT_QUOTE_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

pub struct ServerConfig {
    pub addr: SocketAddr,
    pub quote_url: String,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .expect("Invalid HOST/PORT");
        let quote_url =
            std::env::var("QUOTE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_URL.to_string());
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
        Self {
            addr,
            quote_url,
            database_url,
        }
    }
}
