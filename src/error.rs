//! Error type for clone-URL normalization.
//!
//! Normalization has exactly one failure mode: the input could not be
//! recognized as a git clone URL, or a required field (host, path) was
//! missing after extraction. A single error type covers all of these so
//! callers can branch on "not a git URL" without inspecting variants.

/// The input string is not a recognizable git clone URL.
///
/// Carries the offending raw input so call sites that log or surface the
/// failure can show what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid git clone URL: {url}")]
pub struct InvalidUrlError {
    /// The raw input that failed to normalize.
    pub url: String,
}

impl InvalidUrlError {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_raw_input() {
        let err = InvalidUrlError::new("not-a-url");
        assert_eq!(err.to_string(), "invalid git clone URL: not-a-url");
    }
}
