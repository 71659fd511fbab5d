//! The local dependency store and clone backends.
//!
//! Materialized dependencies live under `_build/dependencies/<name>`, one
//! subtree per dependency name. The store is treated as exclusively owned
//! by the running invocation; nothing here locks against concurrent
//! writers, and a failed clone may leave a partial subtree behind for
//! that one name.

use std::path::{Path, PathBuf};

use colored::*;
use git2::Repository;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::reference::RepositoryLocator;

/// Store root, relative to the workspace root.
pub const DEPENDENCY_STORE: &str = "_build/dependencies";

/// The result of a successful acquisition.
///
/// Created transiently; not persisted anywhere yet. A future lockfile
/// writer would serialize these.
#[derive(Debug)]
pub struct DependencyRecord {
    pub locator: RepositoryLocator,
    pub local_path: PathBuf,
    pub manifest_verified: bool,
}

/// Capability seam around the actual clone so tests can swap in a fake
/// instead of hitting the network.
pub trait CloneBackend {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Default backend: a full blocking clone over HTTPS via libgit2.
pub struct GitCloneBackend;

impl CloneBackend for GitCloneBackend {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷"),
        );
        pb.set_message(format!("Cloning {}...", url));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        match Repository::clone(url, dest) {
            Ok(_repo) => {
                pb.finish_with_message(format!("{} Cloned {}", "✓".green(), url));
                Ok(())
            }
            Err(err) => {
                pb.finish_with_message(format!("{} Failed {}", "x".red(), url));
                Err(Error::MaterializationFailed {
                    url: url.to_string(),
                    detail: err.message().to_string(),
                })
            }
        }
    }
}
