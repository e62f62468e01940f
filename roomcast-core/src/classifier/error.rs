use crate::model::{Method, ParamKind};
use thiserror::Error;

/// JSON-RPC error code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error code for missing or malformed params.
pub const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("unrecognized notification method '{method}'")]
    UnknownMethod { method: String },

    #[error("'{method}' notification has a missing or mistyped param '{field}' (expected {expected})")]
    MissingOrMistypedField {
        method: Method,
        field: String,
        expected: ParamKind,
    },
}

impl ClassificationError {
    /// Code to report back through the transport's error reply.
    pub fn code(&self) -> i64 {
        match self {
            Self::UnknownMethod { .. } => METHOD_NOT_FOUND,
            Self::MissingOrMistypedField { .. } => INVALID_PARAMS,
        }
    }

    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Method name as received.
    pub fn method(&self) -> &str {
        match self {
            Self::UnknownMethod { method } => method,
            Self::MissingOrMistypedField { method, .. } => method.as_str(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownMethod { .. } => None,
            Self::MissingOrMistypedField { field, .. } => Some(field),
        }
    }
}
