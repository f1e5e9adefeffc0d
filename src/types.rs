#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Shared value types naming courses, assignments, and submissions.
//!
//! These carry only the identifying data this crate needs; the richer
//! platform objects (rosters with sections, submissions with files and
//! grades) live behind the grading-platform SDK and are reduced to these
//! shapes by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a course by name and academic period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRef {
    /// The course name, e.g. `"COS126"`.
    name:   String,
    /// The academic period, e.g. `"F2022"`.
    period: String,
}

impl CourseRef {
    /// Creates a new course reference.
    pub fn new(name: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            period: period.into(),
        }
    }

    /// The course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The academic period.
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Returns the name and period joined by `delim`.
    pub fn label(&self, delim: &str) -> String {
        format!("{}{}{}", self.name, delim, self.period)
    }

    /// Returns the path segment for this course, `"{name}_{period}"`.
    ///
    /// The underscore join is the stable on-disk convention; a course named
    /// `COS126` in period `F2022` always maps to the segment
    /// `COS126_F2022`.
    pub fn dir_name(&self) -> String {
        self.label("_")
    }
}

impl fmt::Display for CourseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.period)
    }
}

/// Identifies a named assignment within a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentRef {
    /// The assignment name, e.g. `"Hello"`.
    name: String,
}

impl AssignmentRef {
    /// Creates a new assignment reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The assignment name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AssignmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The student emails enrolled in a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Enrolled student emails.
    students: Vec<String>,
}

impl Roster {
    /// Creates a roster from a list of student emails.
    pub fn new(students: Vec<String>) -> Self {
        Self { students }
    }

    /// The enrolled student emails.
    pub fn students(&self) -> &[String] {
        &self.students
    }
}

/// A submission identifier and the students associated with it.
///
/// A submission may belong to multiple students (group work); a student
/// has at most one submission per assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// The platform-assigned submission id.
    id:       i64,
    /// Emails of the students on this submission.
    students: Vec<String>,
}

impl SubmissionRecord {
    /// Creates a new submission record.
    pub fn new(id: i64, students: Vec<String>) -> Self {
        Self { id, students }
    }

    /// The submission id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Emails of the students on this submission.
    pub fn students(&self) -> &[String] {
        &self.students
    }
}
