use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::cotacao::get_cotacao;

pub fn router() -> Router<AppState> {
    Router::new().route("/cotacao", get(get_cotacao))
}
