//! Shared error types
//!
//! `FormatError` is the decoder's only failure; `PipelineError` covers the
//! capture, histogram and export stages around it.

pub mod error;

pub use error::{FormatError, PipelineError, Result};
