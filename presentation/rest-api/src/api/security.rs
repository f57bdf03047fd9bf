use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use crate::config::auth_config::AuthConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.config_missing")]
    ConfigMissing,
    #[error("auth.token_invalid: {0}")]
    TokenInvalid(#[from] jsonwebtoken::errors::Error),
    #[error("auth.wrong_token_type")]
    WrongTokenType,
    #[error("auth.missing_subject")]
    MissingSubject,
}

/// Claims written by the auth service when it issues tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account email, used as the cart owner identity.
    pub sub: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub iat: u64,
    pub exp: u64,
}

/// Validates signature, expiry and token type; returns the owner identity.
pub fn verify_access_token(token: &str, secret: &str) -> Result<String, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    if data.claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(AuthError::WrongTokenType);
    }
    if data.claims.sub.trim().is_empty() {
        return Err(AuthError::MissingSubject);
    }
    Ok(data.claims.sub)
}

/// Bearer access token; the inner value is the authenticated owner's email.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "access_token_checker")]
pub struct JwtBearer(pub String);

async fn access_token_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let result = req
        .data::<AuthConfig>()
        .ok_or(AuthError::ConfigMissing)
        .and_then(|config| verify_access_token(&bearer.token, &config.jwt_secret));

    match result {
        Ok(owner) => Some(owner),
        Err(e) => {
            tracing::warn!("Authentication failed: {e}");
            None
        }
    }
}
