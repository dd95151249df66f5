//! Error types for graph configuration and algorithm execution.

use crate::config::AlgorithmOutput;

/// Errors that can occur while configuring or running a graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A required attribute is absent, or an attribute value violates
    /// an invariant of the algorithm being run.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the violated requirement
        reason: String,
    },

    /// The computed result differs from the configured expected result.
    #[error("{algorithm} expecting {expected}; instead got {actual}")]
    ResultMismatch {
        /// Name of the algorithm that was run
        algorithm: String,
        /// The configured expected result
        expected: AlgorithmOutput,
        /// The result the algorithm actually produced
        actual: AlgorithmOutput,
    },

    /// A configuration block set attributes outside the whitelist.
    #[error("Unexpected attribute {attributes:?}")]
    UnexpectedAttribute {
        /// Every offending attribute name, sorted
        attributes: Vec<String>,
    },

    /// No configuration block is registered under this id.
    #[error("No graph configured with id '{id}'")]
    UnknownGraph {
        /// The requested graph id
        id: String,
    },

    /// Failed to read a configuration file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON configuration content.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Creates an invalid configuration error with the given reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Creates an unexpected attribute error, sorting the names so the
    /// message is stable regardless of map iteration order.
    pub fn unexpected_attributes<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        attributes.sort();
        Self::UnexpectedAttribute { attributes }
    }

    /// Returns true if this is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns true if this is a result mismatch error.
    pub fn is_result_mismatch(&self) -> bool {
        matches!(self, Self::ResultMismatch { .. })
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_mismatch_message() {
        let err = GraphError::ResultMismatch {
            algorithm: "topological_sort".to_string(),
            expected: AlgorithmOutput::Order(vec![0, 1]),
            actual: AlgorithmOutput::Order(vec![1, 0]),
        };
        assert_eq!(
            err.to_string(),
            "topological_sort expecting [0, 1]; instead got [1, 0]"
        );
        assert!(err.is_result_mismatch());
        assert!(!err.is_invalid_configuration());
    }

    #[test]
    fn test_unexpected_attributes_sorted() {
        let err = GraphError::unexpected_attributes(["weight", "color"]);
        match err {
            GraphError::UnexpectedAttribute { attributes } => {
                assert_eq!(attributes, vec!["color", "weight"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
