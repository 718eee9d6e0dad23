//! Core data structures.
//!
//! - Dependency references and requirement categories
//! - Per-component build metadata and its aggregation
//! - The resolved dependency graph and its walk order
//! - The build context descriptors are keyed by

pub mod context;
pub mod cpp_info;
pub mod dependency;
pub mod graph;

pub use context::BuildContext;
pub use cpp_info::CppInfo;
pub use dependency::{DependencyRef, RequireCategory};
pub use graph::{DependencyGraph, DependencyNode, WalkedDependency};
