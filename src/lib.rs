pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
