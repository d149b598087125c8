pub mod issuer;
pub mod jwt;
pub mod secret;
pub mod verifier;

pub use issuer::{IssuedToken, TokenIssuer};
pub use secret::{SigningSecret, MIN_SECRET_LEN};
pub use verifier::{TokenVerifier, Verification};
