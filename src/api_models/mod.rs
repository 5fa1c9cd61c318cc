pub mod quote;

pub use quote::{CotacaoResponse, QuoteEnvelope, UsdBrlQuote};
