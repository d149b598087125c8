use std::sync::Arc;

use crate::{
    auth::{TokenIssuer, TokenVerifier},
    config::Config,
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            issuer: TokenIssuer::new(&cfg.secret, cfg.token_ttl),
            verifier: TokenVerifier::new(&cfg.secret),
            cfg: Arc::new(cfg.clone()),
        }
    }
}
