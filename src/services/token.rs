//! Bearer token issuance and validation.
//!
//! Tokens are HS256 JWTs whose subject is the username. Expiry is checked
//! here rather than by `jsonwebtoken` so the clock can be supplied.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SECONDS_PER_HOUR};
use crate::domain::Principal;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and checks tokens with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    leeway_seconds: i64,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret_bytes()),
            ttl: Duration::seconds(config.jwt_expiration_hours * SECONDS_PER_HOUR),
            leeway_seconds: config.jwt_leeway_seconds,
        }
    }

    pub fn issue(&self, principal: &Principal) -> AppResult<String> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, principal: &Principal, now: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            sub: principal.username.clone(),
            uid: principal.user_id,
            role: principal.role.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify the signature and return the claims, ignoring expiry.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(decode::<Claims>(token, &self.decoding, &validation)?.claims)
    }

    /// True iff the token is authentic, names `username` and has not expired.
    pub fn validate(&self, token: &str, username: &str) -> bool {
        self.validate_at(token, username, Utc::now())
    }

    pub fn validate_at(&self, token: &str, username: &str, now: DateTime<Utc>) -> bool {
        match self.decode(token) {
            Ok(claims) => {
                claims.sub == username && now.timestamp() < claims.exp + self.leeway_seconds
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "token-service-test-secret-32-chars!!";

    fn service() -> TokenService {
        TokenService::new(&Config::new("sqlite::memory:", SECRET))
    }

    fn principal() -> Principal {
        Principal {
            user_id: 7,
            username: "maria".to_string(),
            role: Some("ROLE_USER".to_string()),
        }
    }

    #[test]
    fn test_token_valid_until_ttl() {
        let tokens = service();
        let issued = Utc::now();
        let token = tokens.issue_at(&principal(), issued).unwrap();

        assert!(tokens.validate_at(&token, "maria", issued));
        assert!(tokens.validate_at(&token, "maria", issued + Duration::hours(23)));
        assert!(!tokens.validate_at(&token, "maria", issued + Duration::hours(24)));
        assert!(!tokens.validate_at(&token, "maria", issued + Duration::hours(25)));
    }

    #[test]
    fn test_token_rejected_for_other_username() {
        let tokens = service();
        let token = tokens.issue(&principal()).unwrap();

        assert!(tokens.validate(&token, "maria"));
        assert!(!tokens.validate(&token, "mario"));
    }

    #[test]
    fn test_tampered_or_foreign_token_rejected() {
        let tokens = service();
        let token = tokens.issue(&principal()).unwrap();
        let other = TokenService::new(&Config::new("sqlite::memory:", "another-secret-with-32-characters!!"));

        assert!(!other.validate(&token, "maria"));
        assert!(!tokens.validate(&format!("{token}x"), "maria"));
        assert!(!tokens.validate("not-a-token", "maria"));
    }

    #[test]
    fn test_leeway_extends_expiry() {
        let mut tokens = service();
        tokens.leeway_seconds = 60;
        let issued = Utc::now();
        let token = tokens.issue_at(&principal(), issued).unwrap();
        let expiry = issued + Duration::hours(24);

        assert!(tokens.validate_at(&token, "maria", expiry + Duration::seconds(30)));
        assert!(!tokens.validate_at(&token, "maria", expiry + Duration::seconds(60)));
    }

    #[test]
    fn test_claims_carry_principal() {
        let tokens = service();
        let token = tokens.issue(&principal()).unwrap();
        let claims = tokens.decode(&token).unwrap();

        assert_eq!(claims.sub, "maria");
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.role.as_deref(), Some("ROLE_USER"));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }
}
