use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;
use crate::database::models::User;

pub mod password;

/// Identity claims carried by every issued access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub email: String,
    pub firstname: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            firstname: user.firstname.clone(),
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Signing and verification keys derived once from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens expire exactly at `exp`.
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, JwtError> {
        Self::new(&security.jwt_secret, Duration::seconds(security.jwt_expiry_secs))
    }

    /// Issue a token for `user` valid from now until now + ttl.
    pub fn issue(&self, user: &User) -> Result<String, JwtError> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_user(user, issued_at, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}
