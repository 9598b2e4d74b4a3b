//! twinpath-report — report renderers.
//!
//! Turns a saved [`twinpath_core::report::AssessmentReport`] into a
//! self-contained HTML page or a Markdown document.

pub mod html;
pub mod markdown;
