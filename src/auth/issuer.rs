use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::encode;

use super::{
    jwt::{header, Keys},
    SigningSecret,
};
use crate::{errors::AppError, models::jwt::Claims};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenIssuer {
    keys: Keys,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        Self {
            keys: Keys::from_secret(secret),
            ttl,
        }
    }

    pub fn issue(&self) -> Result<IssuedToken, AppError> {
        self.issue_at(Utc::now())
    }

    /// Claims carry whole seconds, so `now` is truncated first and the
    /// returned `expires_at` matches the `exp` inside the token exactly.
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let issued_at = now.trunc_subsecs(0);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("token expiry out of range".into()))?;

        let claims = Claims {
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&header(), &claims, &self.keys.encoding)
            .map_err(|e| AppError::Internal(format!("token encode: {e}")))?;

        tracing::debug!(%expires_at, "issued token");

        Ok(IssuedToken { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issuer(ttl: Duration) -> TokenIssuer {
        let secret = SigningSecret::new("issuer-test-secret-0123456789abcdef").unwrap();
        TokenIssuer::new(&secret, ttl)
    }

    #[test]
    fn expiry_is_now_plus_ttl() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let issued = issuer(Duration::minutes(20)).issue_at(t0).unwrap();
        assert_eq!(issued.expires_at, t0 + Duration::minutes(20));
    }

    #[test]
    fn sub_second_part_is_dropped() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let jittered = t0 + Duration::milliseconds(999);
        let issued = issuer(Duration::minutes(1)).issue_at(jittered).unwrap();
        assert_eq!(issued.expires_at, t0 + Duration::minutes(1));
    }

    #[test]
    fn token_is_a_three_part_compact_jws() {
        let issued = issuer(Duration::minutes(1)).issue().unwrap();
        assert_eq!(issued.token.split('.').count(), 3);
    }

    #[test]
    fn header_names_hs256() {
        let issued = issuer(Duration::minutes(1)).issue().unwrap();
        let h = jsonwebtoken::decode_header(&issued.token).unwrap();
        assert_eq!(h.alg, jsonwebtoken::Algorithm::HS256);
    }
}
