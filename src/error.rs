//! Typed failures for the acquisition pipeline.
//!
//! Every stage reports failure through [`Error`] and propagates it upward
//! immediately; nothing is retried. The CLI entry point is the only place
//! that turns one into a printed diagnostic and a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A node demanded by the workspace layout does not exist.
    #[error("required workspace path missing: {}", .0.display())]
    MissingWorkspacePath(PathBuf),

    /// The raw dependency reference did not split into host/owner/repo.
    #[error("dependency reference \"{0}\" should be in host/owner/repo form")]
    MalformedReference(String),

    /// The remote repository is absent, unreachable, or carries no package
    /// manifest. The cases are deliberately collapsed into one verdict;
    /// `source` keeps the transport error around when there was one.
    #[error("could not find repository '{reference}' or it is not a Wurst package repository")]
    NotAPackageRepository {
        reference: String,
        #[source]
        source: Option<ureq::Error>,
    },

    /// Cloning into the dependency store failed. `detail` carries the
    /// underlying git diagnostic.
    #[error("failed to materialize '{url}': {detail}")]
    MaterializationFailed { url: String, detail: String },

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("you need to provide a {0}")]
    MissingArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
