use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::SigningSecret;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct Keys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl Keys {
    pub fn from_secret(secret: &SigningSecret) -> Self {
        let secret = secret.as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub fn header() -> Header {
    Header::new(ALGORITHM)
}

/// Signature and algorithm checks only. Expiry is compared by the verifier
/// against its own clock, without leeway.
pub fn validation() -> Validation {
    let mut v = Validation::new(ALGORITHM);
    v.validate_exp = false;
    v.leeway = 0;
    v.set_required_spec_claims(&["exp"]);
    v
}
