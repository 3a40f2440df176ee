pub mod guards;
pub mod middleware;

pub use guards::{require_bearer, tokens_match};
