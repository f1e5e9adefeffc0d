#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::types::{AssignmentRef, CourseRef};

/// Default base directory for artifacts, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// An enum to represent possible errors when resolving a destination.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    /// An assignment destination was requested without its course.
    #[error("Assignment `{assignment}` requires a course to resolve a path")]
    AssignmentWithoutCourse {
        /// The assignment that was supplied on its own.
        assignment: String,
    },
    /// An existing non-directory occupies a directory position.
    #[error("Not a directory: `{0}`")]
    NotADirectory(PathBuf),
    /// A directory could not be created.
    #[error("Could not create directory `{path}`")]
    CreateDir {
        /// The directory that could not be created.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Where an artifact belongs, relative to the output root.
///
/// An assignment destination always names its course, so a path with an
/// assignment segment outside a course segment cannot be expressed.
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    /// Directly under the output root.
    Root,
    /// Under the course's directory.
    Course(&'a CourseRef),
    /// Under the assignment's directory within its course.
    Assignment(&'a CourseRef, &'a AssignmentRef),
}

impl<'a> Destination<'a> {
    /// Builds a destination from optional course and assignment parts.
    ///
    /// Supplying an assignment without a course is a caller error,
    /// rejected with [`PathError::AssignmentWithoutCourse`].
    pub fn from_parts(
        course: Option<&'a CourseRef>,
        assignment: Option<&'a AssignmentRef>,
    ) -> Result<Self, PathError> {
        match (course, assignment) {
            (None, None) => Ok(Self::Root),
            (Some(course), None) => Ok(Self::Course(course)),
            (Some(course), Some(assignment)) => Ok(Self::Assignment(course, assignment)),
            (None, Some(assignment)) => Err(PathError::AssignmentWithoutCourse {
                assignment: assignment.name().to_string(),
            }),
        }
    }

    /// Appends this destination's segments to `dir`.
    fn push_onto(&self, dir: &mut PathBuf) {
        match self {
            Self::Root => {}
            Self::Course(course) => dir.push(course.dir_name()),
            Self::Assignment(course, assignment) => {
                dir.push(course.dir_name());
                dir.push(assignment.name());
            }
        }
    }
}

/// The root directory that written artifacts live under.
///
/// Passed explicitly wherever a path is resolved, so tests can point it at
/// a temporary directory instead of the conventional `output/` folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRoot {
    /// Base directory for artifacts.
    base: PathBuf,
}

impl OutputRoot {
    /// Creates an output root at the given base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory for artifacts.
    pub fn base(&self) -> &Path {
        self.base.as_path()
    }

    /// Resolves the path for `file_name` at the given destination.
    ///
    /// Segments compose as `base/{course}/{assignment}/{file_name}`, with
    /// course and assignment included only when the destination names
    /// them. All intermediate directories are created if absent;
    /// `file_name` itself is treated as a leaf and is not created.
    pub fn resolve(
        &self,
        dest: Destination<'_>,
        file_name: impl AsRef<Path>,
    ) -> Result<PathBuf, PathError> {
        self.resolve_dir(dest, None).map(|dir| dir.join(file_name.as_ref()))
    }

    /// Resolves the path for `file_name` inside `folder` at the given
    /// destination.
    ///
    /// Used for commands that produce one file per student: the caller
    /// supplies the subfolder name, already sanitized into safe file-name
    /// characters, and calls this once per student.
    pub fn resolve_in(
        &self,
        dest: Destination<'_>,
        folder: impl AsRef<Path>,
        file_name: impl AsRef<Path>,
    ) -> Result<PathBuf, PathError> {
        self.resolve_dir(dest, Some(folder.as_ref()))
            .map(|dir| dir.join(file_name.as_ref()))
    }

    /// Resolves a path from optional course and assignment parts.
    ///
    /// Convenience over [`Destination::from_parts`] + [`Self::resolve`].
    pub fn resolve_parts(
        &self,
        course: Option<&CourseRef>,
        assignment: Option<&AssignmentRef>,
        file_name: impl AsRef<Path>,
    ) -> Result<PathBuf, PathError> {
        self.resolve(Destination::from_parts(course, assignment)?, file_name)
    }

    /// Composes and creates the directory an artifact will be written to.
    fn resolve_dir(
        &self,
        dest: Destination<'_>,
        folder: Option<&Path>,
    ) -> Result<PathBuf, PathError> {
        let mut dir = self.base.clone();
        dest.push_onto(&mut dir);
        if let Some(folder) = folder {
            dir.push(folder);
        }
        ensure_dir(&dir)?;
        Ok(dir)
    }
}

impl Default for OutputRoot {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// Creates `dir` and any missing parents.
///
/// Creation is idempotent: a component that already exists as a directory
/// satisfies the call, including when a concurrent resolution created it
/// first. A component that exists as anything else is a conflict.
fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    if let Some(conflict) = existing_non_dir(dir) {
        return Err(PathError::NotADirectory(conflict));
    }
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => match existing_non_dir(dir) {
            Some(conflict) => Err(PathError::NotADirectory(conflict)),
            None => Err(PathError::CreateDir {
                path:   dir.to_path_buf(),
                source: e,
            }),
        },
    }
}

/// Returns the deepest component of `dir` that exists but is not a
/// directory, if any.
fn existing_non_dir(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| p.exists() && !p.is_dir())
        .map(Path::to_path_buf)
}
