//! HTTP API for the Homestay backend
//!
//! Exposes the user and booking workflows of `hs_core` over actix-web with
//! JWT authentication and the `{code, message, result}` envelope.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
