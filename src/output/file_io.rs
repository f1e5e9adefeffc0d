#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::outcome::Checked;

/// Checks that `path` has a `.csv` extension.
///
/// Returns the failure message instead of raising, so the caller decides
/// whether to display it, log it, or abort.
pub fn validate_csv(path: impl AsRef<Path>) -> Checked {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "csv") {
        Checked::pass(())
    } else {
        Checked::fail(format!("Not a csv file: {}", path.display()))
    }
}

/// Saves rows of data into a csv file with a header row.
///
/// Each row serializes to one record; all rows should have the same
/// fields, which become the header. Parent directories are created if
/// absent. If `path` does not have a `.csv` extension the call fails and
/// nothing is written.
///
/// * `rows`: the data to save.
/// * `path`: the path of the csv file.
/// * `description`: a short description of the data, used in log messages.
pub fn save_csv<T: Serialize>(
    rows: &[T],
    path: impl AsRef<Path>,
    description: &str,
) -> Result<PathBuf> {
    let path = path.as_ref();

    if let Checked::Fail(message) = validate_csv(path) {
        bail!(message);
    }

    tracing::info!("Saving {} to: {}", description, path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Could not open {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Could not write {description} row"))?;
    }
    writer
        .flush()
        .with_context(|| format!("Could not finish writing {}", path.display()))?;

    Ok(path.to_path_buf())
}
