//! Use case orchestration for srcguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, repo, domain, and render layers. The CLI crate depends on this;
//! it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod report;
mod scan;

pub use report::{parse_report_json, serialize_report, to_renderable};
pub use scan::{run_scan, verdict_exit_code, ScanInput, ScanOutput};
