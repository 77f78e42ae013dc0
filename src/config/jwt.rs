//! JWT signing configuration.
//!
//! Read from the environment once at startup:
//!
//! - `JWT_SECRET`: HMAC signing key shared by access and refresh tokens.
//!   Falls back to a development value; set it in any real deployment.
//! - `JWT_ACCESS_EXPIRY` / `JWT_REFRESH_EXPIRY`: lifetimes in seconds,
//!   defaulting to one hour and seven days.

use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            refresh_token_expiry: env::var("JWT_REFRESH_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800),
        }
    }
}
