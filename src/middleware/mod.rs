//! Middleware del sistema
//!
//! Autenticación (extractores), CORS y rate limiting.

pub mod auth;
pub mod cors;
pub mod rate_limit;

pub use auth::{AdminSession, AuthSession};
pub use cors::cors_layer;
pub use rate_limit::{rate_limit_middleware, RateLimitState};
