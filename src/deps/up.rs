//! Re-resolution of declared dependencies (`wpm up`).

use std::fs;

use anyhow::{Context, Result};
use colored::*;

use crate::workspace::DEPENDENCY_FILE;

/// Handle `wpm up`: run the acquisition pipeline for every reference
/// declared in `wurst.dependencies`, one per line.
///
/// This is a flat re-fetch of the top-level declarations, not a graph
/// resolution; nothing declared by the dependencies themselves is
/// followed. The first failing entry aborts the command.
pub fn resolve_declared() -> Result<()> {
    let content = fs::read_to_string(DEPENDENCY_FILE)
        .with_context(|| format!("failed to read {}", DEPENDENCY_FILE))?;

    let references = declared_references(&content);
    if references.is_empty() {
        println!(
            "{} No dependencies declared in {}.",
            "ℹ".blue(),
            DEPENDENCY_FILE
        );
        return Ok(());
    }

    println!(
        "{} Resolving {} declared dependencies...",
        "📦".blue(),
        references.len()
    );
    for reference in references {
        super::require_dependency(reference)?;
    }

    println!("{} All declared dependencies materialized.", "✓".green());
    Ok(())
}

/// One reference per line; blank lines and `#` comments are skipped.
fn declared_references(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
