//! Chirp validation: length limit and profanity masking.
//!
//! # Responsibilities
//! - Reject bodies longer than [`MAX_CHIRP_LENGTH`] bytes
//! - Replace denylisted words with the mask, ignoring case
//!
//! # Design Decisions
//! - Length is measured in bytes of the decoded UTF-8 body, before masking
//! - Splitting on single spaces drops empty fragments, so runs of spaces
//!   collapse to one in the output; this matches the historical behavior
//!   of the service and is pinned by tests
//! - Only whole words are masked; `kerfufflee` passes through untouched

use thiserror::Error;

/// Maximum chirp body length in bytes. The limit is inclusive.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement for denylisted words.
const MASK: &str = "****";

/// Words masked out of chirp bodies. Lowercase; matching ignores ASCII case.
const DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Why a chirp was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body could not be decoded into a chirp.
    #[error("Something went wrong")]
    MalformedInput,

    /// The decoded body exceeds [`MAX_CHIRP_LENGTH`].
    #[error("Chirp is too long")]
    TooLong,
}

/// Validate a chirp body, returning the cleaned text.
///
/// The length check runs against the raw body; masking never changes
/// whether a chirp is accepted.
pub fn validate(body: &str) -> Result<String, ValidationError> {
    if body.len() > MAX_CHIRP_LENGTH {
        return Err(ValidationError::TooLong);
    }

    Ok(clean_body(body))
}

/// Mask denylisted words. Words are space-separated; runs of spaces collapse.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            if DENYLIST
                .iter()
                .any(|banned| word.eq_ignore_ascii_case(banned))
            {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_denylisted_word() {
        let cleaned =
            validate("This is a kerfuffle opinion I need to share with the world").unwrap();
        assert_eq!(
            cleaned,
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn masks_every_denylisted_word() {
        let cleaned = validate("kerfuffle sharbert fornax").unwrap();
        assert_eq!(cleaned, "**** **** ****");
    }

    #[test]
    fn masking_ignores_case() {
        for body in ["KERFUFFLE", "Kerfuffle", "kerFuffle"] {
            assert_eq!(validate(body).unwrap(), MASK);
        }
    }

    #[test]
    fn no_partial_word_masking() {
        assert_eq!(validate("kerfufflee").unwrap(), "kerfufflee");
        assert_eq!(validate("sharbert!").unwrap(), "sharbert!");
    }

    #[test]
    fn exactly_140_bytes_is_valid() {
        let body = "a".repeat(MAX_CHIRP_LENGTH);
        assert_eq!(validate(&body).unwrap(), body);
    }

    #[test]
    fn over_140_bytes_is_too_long() {
        let body = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(validate(&body), Err(ValidationError::TooLong));
    }

    #[test]
    fn length_is_measured_in_bytes() {
        // 47 three-byte characters decode to 141 bytes.
        let body = "€".repeat(47);
        assert_eq!(validate(&body), Err(ValidationError::TooLong));
    }

    #[test]
    fn clean_body_is_unchanged_without_denylisted_words() {
        let cleaned = validate("just a normal chirp").unwrap();
        assert_eq!(cleaned, "just a normal chirp");
    }

    #[test]
    fn runs_of_spaces_collapse() {
        assert_eq!(validate("  hello   kerfuffle world ").unwrap(), "hello **** world");
    }
}
