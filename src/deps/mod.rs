//! Dependency acquisition.
//!
//! This module drives the pipeline that turns a raw reference into a
//! materialized local dependency:
//!
//! - **Acquire**: parse → probe manifest → clone into the store
//! - **Up**: re-run acquisition for every declared dependency
//!
//! ## Commands
//!
//! - `wpm require <reference>` - acquire one dependency
//! - `wpm up` - re-resolve everything in `wurst.dependencies`

mod acquire;
mod up;

pub use acquire::{acquire, require_dependency};
pub use up::resolve_declared;
