//! Error types for mcp-inspect
//!
//! Centralized error handling using thiserror. Every variant is terminal for
//! the current invocation; the binary reports it on stderr and exits 1.

use thiserror::Error;

/// All error types that can occur while talking to the inspector
#[derive(Debug, Error)]
pub enum InspectError {
    /// A `--param` token without `=`
    #[error("Invalid parameter format: {0}")]
    InvalidParam(String),

    /// Tool name absent from the catalog
    #[error("Tool '{name}' not found.")]
    ToolNotFound { name: String, suggestions: Vec<String> },

    /// Schema lookup found no descriptor with that name
    #[error("Tool '{0}' not found.")]
    SchemaNotFound(String),

    /// Category filter removed every tool
    #[error("No tools found matching category: {0}")]
    NoMatches(String),

    /// Inspector returned an empty tool list
    #[error("No tools found.")]
    EmptyCatalog,

    /// The inspector process could not be started
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The inspector exited with a non-zero status
    #[error("reloaderoo failed: {stderr}")]
    Transport { status: Option<i32>, stderr: String },

    /// The inspector did not finish within the configured timeout
    #[error("Inspector timed out after {0}ms")]
    Timeout(u64),

    /// Standard output was not valid JSON
    #[error("could not parse JSON response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    /// Valid JSON with an unexpected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InspectError {
    /// Whether the list facility would help the user recover
    pub fn wants_list_hint(&self) -> bool {
        match self {
            Self::ToolNotFound { suggestions, .. } => suggestions.is_empty(),
            Self::SchemaNotFound(_) => true,
            _ => false,
        }
    }
}

/// Result type alias for mcp-inspect operations
pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_error() {
        let err = InspectError::InvalidParam("scheme".to_string());
        assert_eq!(err.to_string(), "Invalid parameter format: scheme");
    }

    #[test]
    fn test_tool_not_found_error() {
        let err = InspectError::ToolNotFound {
            name: "boot_simm".to_string(),
            suggestions: vec!["boot_sim".to_string()],
        };
        assert_eq!(err.to_string(), "Tool 'boot_simm' not found.");
        assert!(!err.wants_list_hint());
    }

    #[test]
    fn test_tool_not_found_without_suggestions_hints_list() {
        let err = InspectError::ToolNotFound {
            name: "zzz".to_string(),
            suggestions: vec![],
        };
        assert!(err.wants_list_hint());
    }

    #[test]
    fn test_schema_not_found_error() {
        let err = InspectError::SchemaNotFound("nope".to_string());
        assert_eq!(err.to_string(), "Tool 'nope' not found.");
        assert!(err.wants_list_hint());
    }

    #[test]
    fn test_no_matches_error() {
        let err = InspectError::NoMatches("zzz".to_string());
        assert_eq!(err.to_string(), "No tools found matching category: zzz");
    }

    #[test]
    fn test_transport_error_carries_stderr() {
        let err = InspectError::Transport {
            status: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "reloaderoo failed: boom");
        assert!(!err.wants_list_hint());
    }

    #[test]
    fn test_decode_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = InspectError::Decode {
            source,
            raw: "not json".to_string(),
        };
        assert!(err.to_string().starts_with("could not parse JSON response:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InspectError = io_err.into();
        assert!(matches!(err, InspectError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: InspectError = json_err.into();
        assert!(matches!(err, InspectError::Json(_)));
    }
}
