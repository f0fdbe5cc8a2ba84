//! Pure compliance evaluation (no IO).
//!
//! Input: candidate files loaded elsewhere.
//! Output: violations + verdict + summary data.

#![forbid(unsafe_code)]

pub mod classify;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify::{classify, Classification};
pub use engine::{evaluate, scan_file, FileOutcome};
