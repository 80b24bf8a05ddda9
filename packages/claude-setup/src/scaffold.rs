//! Creates a new project directory from the manifest.
//!
//! Creation is not transactional: if a write fails partway through, whatever
//! was already written is left in place. Because the target directory must
//! not exist beforehand, re-running after a failure reports
//! [`ScaffoldError::AlreadyExists`] until the partial output is removed.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use bon::Builder;
use derive_more::{Display, Error};

use crate::manifest::{self, MANIFEST};

/// A request to scaffold a new project.
#[derive(Debug, Clone, Builder)]
pub struct ProjectRequest {
    /// Name of the project; also the name of the created directory.
    #[builder(into)]
    pub name: String,

    /// Parent directory of the project. Defaults to the current directory.
    #[builder(into)]
    pub base_path: Option<PathBuf>,
}

impl ProjectRequest {
    /// The directory the project is created in.
    pub fn target(&self) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(&self.name),
            None => Path::new(".").join(&self.name),
        }
    }
}

/// Errors that stop a project from being created.
#[derive(Debug, Display, Error)]
pub enum ScaffoldError {
    /// The project name is empty or could escape the base directory.
    #[display("invalid project name {name:?}: {reason}")]
    InvalidName {
        name: String,
        reason: &'static str,
    },

    /// The target directory is already present.
    #[display("target directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// Creating a directory or writing a file failed.
    #[display("write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ScaffoldError {
    fn write(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Write { path, source }
    }
}

/// Check that a project name is safe to use as a single directory name.
///
/// Names must contain at least one letter or digit, and otherwise only
/// letters, digits, `-`, and `_`. This rules out path separators as well as
/// `.` and `..`.
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = |reason| ScaffoldError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "only letters, numbers, hyphens, and underscores are allowed",
        ));
    }
    if !name.chars().any(char::is_alphanumeric) {
        return Err(invalid("name must contain a letter or number"));
    }

    Ok(())
}

/// Create the project described by `request`.
///
/// Fails without touching the filesystem if the name is invalid or the target
/// directory already exists. Existing files are never overwritten.
#[tracing::instrument]
pub fn create(request: &ProjectRequest) -> Result<(), ScaffoldError> {
    validate_name(&request.name)?;

    let target = request.target();
    let exists = target
        .try_exists()
        .map_err(ScaffoldError::write(&target))?;
    if exists || target.is_symlink() {
        return Err(ScaffoldError::AlreadyExists { path: target });
    }

    if let Some(base) = &request.base_path {
        fs::create_dir_all(base).map_err(ScaffoldError::write(base))?;
    }

    // `create_dir` rather than `create_dir_all` so a directory that appears
    // between the check above and now is still refused.
    match fs::create_dir(&target) {
        Ok(()) => tracing::debug!(?target, "created project directory"),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists { path: target });
        }
        Err(e) => return Err(ScaffoldError::write(&target)(e)),
    }

    for dir in manifest::directories() {
        let path = target.join(dir);
        fs::create_dir_all(&path).map_err(ScaffoldError::write(&path))?;
        tracing::debug!(?path, "created directory");
    }

    for entry in MANIFEST {
        let path = target.join(entry.path);
        let content = entry.render(&request.name);
        write_new(&path, &content).map_err(ScaffoldError::write(&path))?;
        tracing::debug!(?path, bytes = content.len(), "wrote file");
    }

    Ok(())
}

/// Write a file that must not already exist.
fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())
}
