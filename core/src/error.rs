use std::path::PathBuf;

use serde::Serialize;

/// Failure to build a SOP repository from an external catalog.
///
/// Triage itself never fails; only loading a catalog can.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read SOP catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in SOP catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid SOP '{sop_id}' ({field}): {message}")]
    Invalid {
        sop_id: String,
        field: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub(crate) fn invalid(sop_id: &str, field: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Invalid {
            sop_id: sop_id.to_string(),
            field,
            message: message.into(),
        }
    }
}

/// Structured error report for scripts and agents.
/// Every report carries a machine code plus enough context to fix the input.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Machine-readable error code (e.g. "catalog_invalid", "usage_error")
    pub error: String,
    /// Human/agent-readable description of what went wrong
    pub message: String,
    /// Which field caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Hint about what the correct usage looks like
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_hint: Option<String>,
}

impl ErrorReport {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            field: None,
            docs_hint: None,
        }
    }

    pub fn with_docs_hint(mut self, hint: impl Into<String>) -> Self {
        self.docs_hint = Some(hint.into());
        self
    }
}

impl From<&CatalogError> for ErrorReport {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::Io { .. } => {
                ErrorReport::new(codes::CATALOG_UNREADABLE, err.to_string())
                    .with_docs_hint("Check --sops / OPSENGINE_SOPS_PATH points to a readable file")
            }
            CatalogError::Parse(_) => {
                ErrorReport::new(codes::CATALOG_PARSE_FAILED, err.to_string()).with_docs_hint(
                    "Expected {\"sops\": [{\"id\", \"title\", \"category\", \
                     \"keywords\", \"policy_text\"}]}",
                )
            }
            CatalogError::Invalid { sop_id, field, .. } => ErrorReport {
                error: codes::CATALOG_INVALID.to_string(),
                message: err.to_string(),
                field: Some(format!("sops[{sop_id}].{field}")),
                docs_hint: Some(
                    "Keywords must be non-empty lowercase strings; ids must be unique".to_string(),
                ),
            },
        }
    }
}

/// Error codes used across the CLI and core
pub mod codes {
    pub const CATALOG_INVALID: &str = "catalog_invalid";
    pub const CATALOG_UNREADABLE: &str = "catalog_unreadable";
    pub const CATALOG_PARSE_FAILED: &str = "catalog_parse_failed";
    pub const USAGE_ERROR: &str = "usage_error";
}
