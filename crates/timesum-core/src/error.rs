//! Error type for tokens that match no grammar.

use thiserror::Error;

/// A token that is not a recognised time expression.
///
/// Raised both for tokens of an unknown shape and for clock values that are
/// out of range (`24:00`, `12:60`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("bad item [{token}]")]
pub struct BadToken {
    token: String,
}

impl BadToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The offending token, verbatim.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_token_in_brackets() {
        let err = BadToken::new("abc");
        assert_eq!(err.to_string(), "bad item [abc]");
        assert_eq!(err.token(), "abc");
    }

    #[test]
    fn empty_token_is_reported_as_empty_brackets() {
        assert_eq!(BadToken::new("").to_string(), "bad item []");
    }
}
