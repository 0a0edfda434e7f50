//! Error types for tool dispatch and reply validation.
//!
//! The rules in `turn-core` cannot fail. Everything that can go wrong happens
//! at the JSON boundary: the model calls a function that does not exist,
//! sends arguments that do not match the scenario schema, or returns a final
//! reply without a usable `outcome`.
//!
//! # Design Principles
//!
//! - **Type Safety**: tool calls and replies each have their own error enum
//! - **Severity Classification**: errors say whether the input was bad or the
//!   service misbehaved
//! - **Stable Codes**: every variant has a fixed `error_code()` for logs and
//!   client responses

use turn_core::Outcome;

/// Severity level of an error, used for logging and response mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input from the model or the caller. Reject, do not retry as-is.
    Validation,

    /// Unexpected failure inside the service. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all turn-manager errors.
pub trait TurnError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while dispatching a tool call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The model asked for a function this plugin does not expose.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// The arguments did not deserialize into `{"scenario": Scenario}`.
    #[error("invalid arguments for calculateOutcome: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// The outcome could not be serialized back into JSON.
    #[error("failed to serialize outcome: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl TurnError for ToolError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownFunction(_) | Self::InvalidArguments(_) => ErrorSeverity::Validation,
            Self::Serialization(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFunction(_) => "TOOL_UNKNOWN_FUNCTION",
            Self::InvalidArguments(_) => "TOOL_INVALID_ARGUMENTS",
            Self::Serialization(_) => "TOOL_SERIALIZATION",
        }
    }
}

/// Errors raised while validating the model's final reply.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("reply is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("reply root is not a JSON object")]
    NotAnObject,

    #[error("reply has no 'outcome' field")]
    MissingOutcome,

    #[error("reply 'outcome' field is malformed: {0}")]
    MalformedOutcome(#[source] serde_json::Error),

    #[error("reply has no 'scenario' field")]
    MissingScenario,

    #[error("reply 'scenario' field is malformed: {0}")]
    MalformedScenario(#[source] serde_json::Error),

    /// The outcome does not follow from the scenario under the combat rules.
    #[error("reply outcome {reported:?} disagrees with the rules ({reason})")]
    InconsistentOutcome {
        reported: Outcome,
        reason: &'static str,
    },
}

impl TurnError for ResponseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ResponseError::*;
        match self {
            NotJson(_) => "RESPONSE_NOT_JSON",
            NotAnObject => "RESPONSE_NOT_AN_OBJECT",
            MissingOutcome => "RESPONSE_MISSING_OUTCOME",
            MalformedOutcome(_) => "RESPONSE_MALFORMED_OUTCOME",
            MissingScenario => "RESPONSE_MISSING_SCENARIO",
            MalformedScenario(_) => "RESPONSE_MALFORMED_SCENARIO",
            InconsistentOutcome { .. } => "RESPONSE_INCONSISTENT_OUTCOME",
        }
    }
}
