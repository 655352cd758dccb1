//! Engine error type.
//!
//! Only caller bugs are errors. Clicking a matched, revealed or locked card
//! is a normal no-op and never surfaces here.

/// Errors raised by the engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A card index outside the current deck.
    #[error("card index {index} out of range for deck of {len}")]
    InvalidIndex { index: usize, len: usize },

    /// A UI card identifier that does not name a card index.
    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),

    /// A fixed layout that is not exactly two of each face.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl EngineError {
    /// True for the invalid-argument family (bad index or card id).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidIndex { .. } | EngineError::InvalidCardId(_)
        )
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = EngineError::InvalidIndex { index: 16, len: 16 };
        assert_eq!(err.to_string(), "card index 16 out of range for deck of 16");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_family() {
        assert!(EngineError::InvalidCardId("x".into()).is_invalid_argument());
        assert!(!EngineError::InvalidLayout("odd".into()).is_invalid_argument());
        assert!(!EngineError::InvalidConfig("empty".into()).is_invalid_argument());
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: EngineError = parse.into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
