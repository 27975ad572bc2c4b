//! Chirp content moderation.

use crate::shared::error::AppError;

/// Longest accepted chirp body, in characters, measured before masking.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced by [`MASK`]. Applied in this order.
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement token for a denylisted word.
pub const MASK: &str = "****";

/// Content rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Chirp is too long")]
    TooLong { length: usize, max: usize },
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Validates and cleans chirp bodies.
///
/// Words are the runs of text between single spaces; a word is masked when it
/// equals a denylisted word ignoring case. Punctuation attached to a word
/// keeps it from matching, and spacing is preserved exactly.
pub struct ContentFilter;

impl ContentFilter {
    /// Check the length of `body` and return it with denylisted words masked.
    pub fn validate(body: &str) -> Result<String, ContentError> {
        let length = body.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ContentError::TooLong {
                length,
                max: MAX_CHIRP_LENGTH,
            });
        }

        Ok(PROFANE_WORDS
            .iter()
            .fold(body.to_string(), |text, word| mask_word(&text, word)))
    }
}

fn mask_word(text: &str, banned: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word.to_lowercase() == banned {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
