#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Email-to-submission-id mapping exports.
pub mod ids;

pub use ids::{DEFAULT_MAPPING_FILENAME, IdRow, export_ids, id_rows, ids_mapping};
