//! The single-dependency acquisition pipeline.
//!
//! `require` runs parse → probe → materialize as a strict sequence; each
//! stage is a hard precondition for the next and the first failure aborts
//! the command. No partial-success continuation, no retries.

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::error;
use crate::probe::{GithubProber, MANIFEST_FILE, ManifestProbe};
use crate::reference::RepositoryLocator;
use crate::store::{CloneBackend, DEPENDENCY_STORE, DependencyRecord, GitCloneBackend};

/// Handle `wpm require <reference>` with the live prober and git backend.
pub fn require_dependency(reference: &str) -> Result<()> {
    let prober = GithubProber::new(MANIFEST_FILE);
    let backend = GitCloneBackend;
    let record = acquire(reference, &prober, &backend, Path::new(DEPENDENCY_STORE))?;
    println!(
        "{} Materialized {} at {}",
        "✓".green(),
        record.locator.name().bold(),
        record.local_path.display()
    );
    Ok(())
}

/// Run the full pipeline for one raw reference.
///
/// The target path is deterministic: `<store_root>/<repository-name>`. A
/// subtree that already exists under that name is reused as-is rather
/// than re-cloned, so acquiring the same locator twice is harmless.
pub fn acquire(
    reference: &str,
    prober: &impl ManifestProbe,
    backend: &impl CloneBackend,
    store_root: &Path,
) -> error::Result<DependencyRecord> {
    let locator = RepositoryLocator::parse(reference)?;
    prober.probe(&locator)?;

    let dest = store_root.join(locator.name());
    if dest.exists() {
        println!(
            "   {} Reusing existing copy: {}",
            "⚡".green(),
            locator.name()
        );
    } else {
        println!("   {} Cloning {}...", "📦".blue(), locator);
        backend.clone_repo(&locator.clone_url(), &dest)?;
    }

    Ok(DependencyRecord {
        locator,
        local_path: dest,
        manifest_verified: true,
    })
}
