#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Creates a mapping from student emails to submission ids.

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    output::{Destination, OutputRoot, save_csv},
    types::{AssignmentRef, CourseRef, Roster, SubmissionRecord},
};

/// Default file name for the saved id mapping.
pub const DEFAULT_MAPPING_FILENAME: &str = "ids.csv";

/// One row of the saved id mapping.
///
/// A submission may have multiple students, so multiple rows may share a
/// `submission_id` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRow {
    /// The submission id shared by every student on the submission.
    pub submission_id: i64,
    /// The student's email.
    pub email:         String,
}

/// Returns a mapping from student emails to submission ids.
///
/// If `roster` is given, the mapping covers the entire course roster, so
/// the submission id is `None` for students without a submission for the
/// assignment. Otherwise, the only students included are those with a
/// submission.
pub fn ids_mapping(
    submissions: &[SubmissionRecord],
    roster: Option<&Roster>,
) -> BTreeMap<String, Option<i64>> {
    let mut ids = BTreeMap::new();

    if let Some(roster) = roster {
        for student in roster.students() {
            ids.insert(student.clone(), None);
        }
    }

    for submission in submissions {
        for student in submission.students() {
            // students can only be associated with one submission, so
            // this never overwrites another submission id
            ids.insert(student.clone(), Some(submission.id()));
        }
    }

    ids
}

/// Returns the csv rows for the given submissions, one per student.
///
/// Students without a submission do not appear in the rows.
pub fn id_rows(submissions: &[SubmissionRecord]) -> Vec<IdRow> {
    submissions
        .iter()
        .flat_map(|submission| {
            submission.students().iter().map(|student| IdRow {
                submission_id: submission.id(),
                email:         student.clone(),
            })
        })
        .collect()
}

/// Saves the id mapping for an assignment under the output root.
///
/// Writes one row per (submission, student) pair to
/// `{root}/{course}/{assignment}/{file_name}`, with columns
/// `submission_id` and `email`, and returns the written path. When
/// `file_name` is `None` the default [`DEFAULT_MAPPING_FILENAME`] is used.
pub fn export_ids(
    root: &OutputRoot,
    course: &CourseRef,
    assignment: &AssignmentRef,
    submissions: &[SubmissionRecord],
    file_name: Option<&str>,
) -> Result<PathBuf> {
    let file_name = file_name.unwrap_or(DEFAULT_MAPPING_FILENAME);
    let path = root
        .resolve(Destination::Assignment(course, assignment), file_name)
        .with_context(|| format!("Could not resolve id mapping path for {course} {assignment}"))?;
    save_csv(&id_rows(submissions), path, "ids")
}
