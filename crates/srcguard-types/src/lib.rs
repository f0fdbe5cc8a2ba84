//! Stable DTOs shared across the srcguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for violations and the emitted report
//! - stable rule identifiers
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod path;
pub mod report;

pub use path::RepoPath;
pub use report::{
    RuleId, ScanData, ScanMode, SrcguardReport, ToolMeta, Verdict, Violation, SCHEMA_REPORT_V1,
};
