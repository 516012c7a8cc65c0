//! Error type for dataset loading

use thiserror::Error;

/// Failure while building a [`ColorDatabase`](super::ColorDatabase).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but carries unusable values.
    #[error("invalid dataset entry {index}: {reason}")]
    InvalidEntry {
        /// Zero-based position of the record in the dataset
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let dataset_err: DatasetError = err.into();
        assert!(matches!(dataset_err, DatasetError::Json(_)));
        assert!(dataset_err.to_string().starts_with("invalid dataset document"));
    }

    #[test]
    fn test_invalid_entry_message() {
        let err = DatasetError::InvalidEntry {
            index: 3,
            reason: "empty name".into(),
        };
        assert_eq!(err.to_string(), "invalid dataset entry 3: empty name");
    }
}
