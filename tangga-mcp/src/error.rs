//! Structured tool errors
//!
//! Errors are values returned to the client, never a reason to stop serving.

use serde::{Deserialize, Serialize};
use tangga_quiz::QuizError;
use tangga_units::{ConversionError, Domain};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_DOMAIN: &str = "INVALID_DOMAIN";
    pub const INVALID_QUANTITY: &str = "INVALID_QUANTITY";
    pub const INVALID_PROBLEM: &str = "INVALID_PROBLEM";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNKNOWN_SESSION: &str = "UNKNOWN_SESSION";
    pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
}

/// Error reported back to the client as a tool result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ToolError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{}: missing argument '{}'", tool, arg))
            .with_suggestion(format!("Call tools/list to see the arguments of {}", tool))
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            codes::ARG_TYPE,
            format!("{}: argument '{}' should be {}, got {}", tool, arg, expected, got),
        )
    }

    pub fn unknown_session(id: &str) -> Self {
        Self::new(codes::UNKNOWN_SESSION, format!("No quiz session '{}'", id))
            .with_suggestion("Start one with quiz_start")
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(codes::UNKNOWN_TOOL, format!("Unknown tool: {}", name))
    }
}

impl From<ConversionError> for ToolError {
    fn from(e: ConversionError) -> Self {
        match &e {
            ConversionError::UnknownUnit { domain: Some(domain), .. } => {
                let units = tangga_units::units_of(*domain).join(", ");
                ToolError::new(codes::UNKNOWN_UNIT, e.to_string())
                    .with_suggestion(format!("{} units: {}", domain, units))
            }
            ConversionError::UnknownUnit { domain: None, .. } => {
                let ladders: Vec<String> = Domain::ALL
                    .into_iter()
                    .map(|d| format!("{} units: {}", d, tangga_units::units_of(d).join(", ")))
                    .collect();
                ToolError::new(codes::UNKNOWN_UNIT, e.to_string()).with_suggestion(ladders.join("; "))
            }
            ConversionError::InvalidDomain(_) => ToolError::new(codes::INVALID_DOMAIN, e.to_string())
                .with_suggestion("Use \"length\" or \"mass\""),
            ConversionError::InvalidQuantity(_) => ToolError::new(codes::INVALID_QUANTITY, e.to_string()),
        }
    }
}

impl From<QuizError> for ToolError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::Conversion(inner) => inner.into(),
            other => ToolError::new(codes::INVALID_PROBLEM, other.to_string()),
        }
    }
}
