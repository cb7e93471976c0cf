//! Display-safe result envelope returned by every engine.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Result of a public engine call.
///
/// Serializes with a `status` tag so a presentation layer can branch on
/// `"ok"`, `"insufficient_data"` or `"error"` without knowing Rust types:
///
/// ```
/// use paddock_errors::Outcome;
///
/// let outcome: Outcome<()> = Outcome::insufficient_data("only one driver");
/// let json = serde_json::to_string(&outcome).unwrap_or_default();
/// assert!(json.contains(r#""status":"insufficient_data""#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The computation produced a result.
    Ok(T),
    /// Not enough qualifying input after filtering.
    InsufficientData {
        /// Human-readable explanation
        message: String,
    },
    /// The computation failed; the message is safe to show to a user.
    Error {
        /// Human-readable explanation
        message: String,
    },
}

/// Discriminant of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    /// `Outcome::Ok`
    Ok,
    /// `Outcome::InsufficientData`
    InsufficientData,
    /// `Outcome::Error`
    Error,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Ok => write!(f, "ok"),
            OutcomeStatus::InsufficientData => write!(f, "insufficient_data"),
            OutcomeStatus::Error => write!(f, "error"),
        }
    }
}

impl<T> Outcome<T> {
    /// Convert an internal result at the engine boundary.
    ///
    /// A `MalformedInput` that reaches the boundary means the whole request
    /// was malformed, so it is reported as an error rather than swallowed.
    pub fn from_result(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(AnalysisError::InsufficientData(message)) => Outcome::InsufficientData { message },
            Err(err) => Outcome::Error {
                message: err.to_string(),
            },
        }
    }

    /// Build an insufficient-data outcome.
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Outcome::InsufficientData {
            message: message.into(),
        }
    }

    /// Build an error outcome.
    pub fn error(message: impl Into<String>) -> Self {
        Outcome::Error {
            message: message.into(),
        }
    }

    /// The outcome's discriminant.
    pub fn status(&self) -> OutcomeStatus {
        match self {
            Outcome::Ok(_) => OutcomeStatus::Ok,
            Outcome::InsufficientData { .. } => OutcomeStatus::InsufficientData,
            Outcome::Error { .. } => OutcomeStatus::Error,
        }
    }

    /// `true` for `Outcome::Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// `true` for `Outcome::InsufficientData`.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Outcome::InsufficientData { .. })
    }

    /// `true` for `Outcome::Error`.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// Consume the outcome, keeping the payload if present.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the payload if present.
    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// The explanatory message of a non-ok outcome.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::InsufficientData { message } | Outcome::Error { message } => Some(message),
        }
    }

    /// Map the payload, preserving non-ok variants.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::InsufficientData { message } => Outcome::InsufficientData { message },
            Outcome::Error { message } => Outcome::Error { message },
        }
    }
}

impl<T> From<Result<T, AnalysisError>> for Outcome<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        Outcome::from_result(result)
    }
}
