#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Csv artifact validation and writing.
pub mod file_io;
/// Artifact destination resolution.
pub mod paths;

pub use file_io::{save_csv, validate_csv};
pub use paths::{DEFAULT_OUTPUT_DIR, Destination, OutputRoot, PathError};
