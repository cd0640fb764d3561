use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::security::{AuthenticationTokenManager, TokenPayload};
use crate::config::TokenSettings;
use crate::shared::error::AppError;

/// Access token claims. Expire after the configured age.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    id: String,
    username: String,
    iat: i64,
    exp: i64,
}

/// Refresh token claims. Never expire; revocation goes through the token store.
#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    id: String,
    username: String,
    iat: i64,
}

/// HS256 JWT token manager with separate access and refresh secrets.
#[derive(Clone)]
pub struct JwtTokenManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_token_age: Duration,
}

impl JwtTokenManager {
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(settings.access_token_key.as_bytes()),
            access_decoding: DecodingKey::from_secret(settings.access_token_key.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(settings.refresh_token_key.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(settings.refresh_token_key.as_bytes()),
            access_token_age: Duration::seconds(settings.access_token_age),
        }
    }

    fn refresh_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }

    fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, AppError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &Self::refresh_validation())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Refresh token rejected");
                AppError::InvalidToken("refresh token tidak valid".into())
            })
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessClaims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.access_token_age).timestamp(),
        };

        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        let claims = RefreshClaims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError> {
        self.decode_refresh(token).map(|_| ())
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError> {
        self.decode_refresh(token).map(|claims| TokenPayload {
            id: claims.id,
            username: claims.username,
        })
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        let data = decode::<AccessClaims>(
            token,
            &self.access_decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            AppError::Unauthorized("Invalid token".into())
        })?;

        Ok(TokenPayload {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}
