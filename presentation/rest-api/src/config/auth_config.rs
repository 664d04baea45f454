use std::env;

/// Bearer token verification settings, attached to the endpoint as poem data.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 secret shared with the token issuer (required)
    ///
    /// Returns `None` when the secret is missing or blank.
    pub fn from_env() -> Option<Self> {
        env::var("JWT_SECRET").ok().and_then(Self::from_secret)
    }

    fn from_secret(secret: String) -> Option<Self> {
        (!secret.trim().is_empty()).then_some(Self { jwt_secret: secret })
    }
}
