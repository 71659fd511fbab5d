//! # wurstpm - Dependency Manager for Wurst Map-Scripting Projects
//!
//! `wpm` validates that a Wurst project workspace is laid out correctly
//! and resolves repository references into locally materialized
//! dependencies.
//!
//! ## Pipeline
//!
//! `wpm require <reference>` runs a strict, sequential pipeline:
//!
//! 1. **Workspace gate** - every required project path must exist
//! 2. **Reference parse** - `host/owner/repo` into a structured locator
//! 3. **Manifest probe** - the remote repository must carry a
//!    `wurst.build` at its root
//! 4. **Materialize** - full clone into `_build/dependencies/<name>`
//!
//! Each stage is a hard precondition for the next; the first failure
//! aborts the command with a single diagnostic line and a non-zero exit.
//!
//! ## Module Organization
//!
//! - [`deps`] - Acquisition pipeline (`require`, `up`)
//! - [`error`] - Typed failures for the pipeline stages
//! - [`probe`] - Remote manifest probing against the code host
//! - [`reference`] - Raw reference parsing into structured locators
//! - [`store`] - The local dependency store and clone backends
//! - [`workspace`] - Workspace layout definition and integrity checking

/// Dependency acquisition (`require`, `up`).
pub mod deps;

/// Typed failures for the pipeline stages.
pub mod error;

/// Remote manifest probing against the code host.
pub mod probe;

/// Raw reference parsing into structured locators.
pub mod reference;

/// The local dependency store and clone backends.
pub mod store;

/// Workspace layout definition and integrity checking.
pub mod workspace;
