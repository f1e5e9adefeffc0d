//! # codepost-powertools
//!
//! Powertools for working with the codePost grading platform: typed
//! outcome values for fallible operations, deterministic output locations
//! for generated artifacts, and csv exports such as the student-email to
//! submission-id mapping.
//!
//! Business logic that talks to the platform wraps the results of its
//! calls in [`outcome::Outcome`] or [`outcome::Checked`], asks
//! [`output::OutputRoot`] where an artifact belongs, and persists it with
//! [`output::save_csv`]. Fetching the platform objects themselves is the
//! SDK client's job, not this crate's.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// For grading exports, such as the email-to-submission-id mapping
pub mod grading;
/// Discriminated outcome values returned by fallible operations
pub mod outcome;
/// For resolving destinations and writing output artifacts
pub mod output;
/// Shared value types for courses, assignments, and submissions
pub mod types;
