//! Public API surface: readiness probe and chirp validation.

pub mod handlers;
