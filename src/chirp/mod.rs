//! Chirp domain logic.
//!
//! A chirp is a short user-submitted text message. The only operation on a
//! chirp is validation: enforce the length limit and mask denylisted words.
//! Chirps are never stored.

pub mod validator;

pub use validator::{validate, ValidationError, MAX_CHIRP_LENGTH};
