//! xmake-buildinfo - export resolved C/C++ dependency build info for xmake
//!
//! This crate walks a resolved dependency graph, aggregates the build
//! metadata of every package and writes xmake descriptor files: one per
//! dependency plus a root descriptor for the consuming project.

pub mod core;
pub mod generator;
pub mod ops;
pub mod util;

/// Graph fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    BuildContext, CppInfo, DependencyGraph, DependencyNode, DependencyRef, RequireCategory,
};

pub use crate::ops::{export, render, ExportError, ExportReport};
pub use crate::util::ExportConfig;
