//! Filesystem adapters: tree walking, candidate loading, targeted-path
//! resolution.
//!
//! Per-file problems degrade to warnings; only a missing scan root is fatal.

#![forbid(unsafe_code)]

mod read;
mod walk;

pub use read::{load_candidate, resolve_targets};
pub use walk::walk_tree;
