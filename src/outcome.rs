#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Discriminated outcome values returned by fallible operations.
//!
//! Functions in this crate that can fail without that failure being
//! exceptional return one of two tagged values instead of an `Err`:
//! [`Outcome`] for retrievals that may legitimately come up empty, and
//! [`Checked`] for validations that carry a human-readable reason on
//! failure. The payload type is tied to the variant, so callers branch by
//! pattern matching rather than checking a boolean discriminant and
//! downcasting the payload.

use serde::{Deserialize, Serialize};

/// The result of a retrieval that may legitimately find nothing.
///
/// `Missing` is an expected condition (a student with no submission, a
/// lookup with no match) and is part of normal control flow. Callers that
/// consider absence an error convert with [`Outcome::ok_or`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation found nothing.
    Missing,
}

impl<T> Outcome<T> {
    /// Wraps a successfully retrieved value.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Constructs the empty outcome.
    pub fn missing() -> Self {
        Self::Missing
    }

    /// Returns whether this outcome holds a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns a reference to the value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Consumes the outcome, returning the value if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Applies `f` to the contained value, leaving `Missing` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Missing => Outcome::Missing,
        }
    }

    /// Converts to a `Result`, treating absence as the given error.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Missing => Err(err),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Missing,
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_value()
    }
}

/// The result of a check that reports why it failed.
///
/// A failed check carries a message meant for display or logging by the
/// caller. The message is stored verbatim; this type never interprets it,
/// and nothing here logs or retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Checked<T = ()> {
    /// The check passed.
    Pass(T),
    /// The check failed, with a human-readable reason.
    Fail(String),
}

impl<T> Checked<T> {
    /// Wraps the result of a passing check.
    pub fn pass(value: T) -> Self {
        Self::Pass(value)
    }

    /// Constructs a failed check carrying a diagnostic message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    /// Returns whether the check passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    /// Returns the failure message, if the check failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass(_) => None,
            Self::Fail(message) => Some(message.as_str()),
        }
    }

    /// Applies `f` to the contained value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        match self {
            Self::Pass(value) => Checked::Pass(f(value)),
            Self::Fail(message) => Checked::Fail(message),
        }
    }

    /// Converts to a `Result`, with the failure message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Pass(value) => Ok(value),
            Self::Fail(message) => Err(message),
        }
    }
}

impl<T> From<Result<T, String>> for Checked<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Pass(value),
            Err(message) => Self::Fail(message),
        }
    }
}
