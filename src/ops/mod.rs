//! High-level operations.

pub mod export;

pub use export::{export, render, ExportError, ExportReport, RenderedExport};
