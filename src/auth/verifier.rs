use chrono::{DateTime, Utc};
use jsonwebtoken::decode;

use super::{
    jwt::{validation, Keys},
    SigningSecret,
};
use crate::models::jwt::Claims;

/// Outcome of checking a presented token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid { expires_at: DateTime<Utc> },
    Expired,
    Invalid,
}

#[derive(Clone)]
pub struct TokenVerifier {
    keys: Keys,
}

impl TokenVerifier {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            keys: Keys::from_secret(secret),
        }
    }

    pub fn verify(&self, token: &str) -> Verification {
        self.verify_at(token, Utc::now())
    }

    /// The signature is checked before any claim is looked at, so a forged
    /// token is reported as invalid whatever its `exp` says.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Verification {
        let claims = match decode::<Claims>(token, &self.keys.decoding, &validation()) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "token rejected");
                return Verification::Invalid;
            }
        };

        let Some(expires_at) = DateTime::from_timestamp(claims.exp, 0) else {
            tracing::debug!(exp = claims.exp, "token rejected: exp out of range");
            return Verification::Invalid;
        };

        if now > expires_at {
            tracing::debug!(%expires_at, "token expired");
            return Verification::Expired;
        }

        Verification::Valid { expires_at }
    }
}
