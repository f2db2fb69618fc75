//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, router, layer stack)
//!     → request.rs (request ID generation)
//!     → middleware/ (hit counting, request metrics)
//!     → handlers (api, admin, static files)
//!     → response.rs (error envelope)
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
