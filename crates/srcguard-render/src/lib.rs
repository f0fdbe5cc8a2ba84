//! Rendering utilities for CI surfaces (console text, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use model::{RenderableReport, RenderableViolation};
pub use text::render_text;
