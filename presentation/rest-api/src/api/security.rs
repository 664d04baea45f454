use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogClaims {
    pub sub: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: u64,
}

/// Identity of the caller, as asserted by a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
}

pub fn verify_token(token: &str, secret: &str) -> Result<AuthenticatedUser, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<CatalogClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(AuthenticatedUser {
        id: UserId::new(token_data.claims.sub),
        name: token_data.claims.name,
    })
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "catalog_bearer_checker")]
pub struct CatalogBearer(pub AuthenticatedUser);

/// Reads the secret from the `AuthConfig` attached to the endpoint as data.
async fn catalog_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(config) = req.data::<AuthConfig>() else {
        tracing::error!("No auth configuration attached to the endpoint, rejecting request");
        return None;
    };

    match verify_token(&bearer.token, &config.jwt_secret) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_tokens::{SECRET, sign};
    use super::*;

    fn token(exp_offset: i64, secret: &str) -> String {
        sign("vendor-a", "Ada Vendor", exp_offset, secret)
    }

    #[test]
    fn should_accept_valid_token() {
        let user = verify_token(&token(3600, SECRET), SECRET).unwrap();

        assert_eq!(user.id, UserId::new("vendor-a"));
        assert_eq!(user.name, "Ada Vendor");
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let result = verify_token(&token(3600, "other-secret"), SECRET);

        assert!(result.unwrap_err().contains("auth.token_validation_failed"));
    }

    #[test]
    fn should_reject_expired_token() {
        let result = verify_token(&token(-3600, SECRET), SECRET);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_token_when_malformed() {
        let result = verify_token("not-a-jwt", SECRET);

        assert!(result.is_err());
    }
}
