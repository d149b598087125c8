use serde::{Deserialize, Serialize};

/// Timing claims carried by every issued token, in seconds since the Unix epoch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claims {
    pub iat: i64,
    pub exp: i64,
}
