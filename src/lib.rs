//! Chirpy API Server Library

pub mod admin;
pub mod api;
pub mod chirp;
pub mod config;
pub mod http;
pub mod observability;

pub use config::schema::ChirpyConfig;
pub use http::HttpServer;
