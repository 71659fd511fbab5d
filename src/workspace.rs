//! Workspace layout definition and integrity checking.
//!
//! Every command is gated on a fixed set of paths existing under the
//! current directory. The scan is an ordered short-circuit: the first
//! missing node wins, so diagnostics are deterministic and reproducible.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Top-level dependency declaration file, one reference per line.
pub const DEPENDENCY_FILE: &str = "wurst.dependencies";

/// An ordered sequence of paths that must exist before any command runs.
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    nodes: Vec<PathBuf>,
}

impl WorkspaceLayout {
    pub fn new(nodes: Vec<PathBuf>) -> Self {
        Self { nodes }
    }

    /// The layout a Wurst map project is expected to carry. The `_build`
    /// entries are the on-disk contract with the downstream build
    /// pipeline (compiled script output, object editor output, packaged
    /// map) and are not created by this tool.
    pub fn wurst_project() -> Self {
        Self::new(
            [
                DEPENDENCY_FILE,
                "_build",
                "_build/dependencies",
                "_build/objectEditingOutput",
                "_build/blizzard.j",
                "_build/common.j",
                "_build/compiled.j.txt",
                "_build/WurstRunMap.w3x",
            ]
            .iter()
            .map(PathBuf::from)
            .collect(),
        )
    }

    /// Check every node in declaration order, stopping at the first one
    /// that does not exist.
    ///
    /// Only existence is checked; whether a node is the expected file or
    /// directory kind is not currently distinguished.
    pub fn verify(&self, root: &Path) -> Result<()> {
        for node in &self.nodes {
            if !root.join(node).exists() {
                return Err(Error::MissingWorkspacePath(node.clone()));
            }
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[PathBuf] {
        &self.nodes
    }
}
