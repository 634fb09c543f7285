use std::fmt;

use anyhow::Error;
use serde::Serialize;
use serde_json::Value;

pub const UNKNOWN_MOCKUP_SET: &str = "UNKNOWN_MOCKUP_SET";

/// Process exit status for rejected command-line input.
pub const USAGE_EXIT_CODE: i32 = 2;

/// A machine-readable failure with a stable `code`.
///
/// Raised inside an `anyhow::Error` and recovered at the CLI boundary with
/// [`find_coded_error`].
#[derive(Debug, Clone)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl CodedError {
    pub fn usage(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn envelope(&self) -> ErrorEnvelope<'_> {
        ErrorEnvelope {
            ok: false,
            error: EnvelopeBody {
                code: self.code,
                message: &self.message,
                details: self.details.as_ref(),
            },
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {}

/// `{"ok": false, "error": {"code", "message", "details"?}}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub ok: bool,
    pub error: EnvelopeBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct EnvelopeBody<'a> {
    pub code: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a Value>,
}

pub fn find_coded_error(error: &Error) -> Option<&CodedError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
}
