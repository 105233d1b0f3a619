//! Session token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use gather_shared::constants::TOKEN_TYPE_SESSION;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Unexpected token type: {0}")]
    WrongTokenType(String),
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

/// Issues and validates the signed session tokens that identify the
/// current user. The sign-in flow owns issuing in production; the
/// server only validates.
#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: i64,
}

impl SessionTokenService {
    pub fn new(secret: &str, expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }

    pub fn issue(&self, user_id: &Uuid) -> Result<String, JwtError> {
        self.issue_with_type(user_id, TOKEN_TYPE_SESSION, self.expiry)
    }

    fn issue_with_type(&self, user_id: &Uuid, token_type: &str, expiry: i64) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type: token_type.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| JwtError::ValidationError(e.to_string()))
    }

    /// Validate a session token and return the user it names.
    pub fn resolve_user(&self, token: &str) -> Result<Uuid, JwtError> {
        let claims = self.validate(token)?;
        if claims.token_type != TOKEN_TYPE_SESSION {
            return Err(JwtError::WrongTokenType(claims.token_type));
        }
        Uuid::parse_str(&claims.sub).map_err(|_| JwtError::InvalidSubject(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_resolve() {
        let service = SessionTokenService::new("secret", 3600);
        let user_id = Uuid::new_v4();
        let token = service.issue(&user_id).unwrap();
        assert_eq!(service.resolve_user(&token).unwrap(), user_id);
    }

    #[test]
    fn test_rejects_other_secret() {
        let issuer = SessionTokenService::new("secret", 3600);
        let verifier = SessionTokenService::new("other-secret", 3600);
        let token = issuer.issue(&Uuid::new_v4()).unwrap();
        assert!(matches!(verifier.resolve_user(&token), Err(JwtError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = SessionTokenService::new("secret", -3600);
        let token = service.issue(&Uuid::new_v4()).unwrap();
        assert!(service.resolve_user(&token).is_err());
    }

    #[test]
    fn test_rejects_other_token_type() {
        let service = SessionTokenService::new("secret", 3600);
        let token = service
            .issue_with_type(&Uuid::new_v4(), "refresh", 3600)
            .unwrap();
        assert!(matches!(service.resolve_user(&token), Err(JwtError::WrongTokenType(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let service = SessionTokenService::new("secret", 3600);
        assert!(service.resolve_user("not-a-token").is_err());
    }
}
