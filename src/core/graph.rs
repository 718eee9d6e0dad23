//! Resolved dependency graph and its walk order.
//!
//! The graph is produced by the package resolver and handed over fully
//! resolved. It keeps the three requirement categories as explicit ordered
//! lists: the walk visits host, then test, then build, and the first
//! dependency it yields becomes the root package.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::cpp_info::CppInfo;
use crate::core::dependency::{DependencyRef, RequireCategory};

/// One package of the graph with its raw component metadata.
///
/// The requirement category is not stored here; it is given by the list of
/// the graph the node sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// Package name, unique per graph
    pub name: String,

    /// Components in declaration order
    #[serde(default)]
    pub components: Vec<CppInfo>,
}

impl DependencyNode {
    /// Create a node with no components.
    pub fn new(name: impl Into<String>) -> Self {
        DependencyNode {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Add a component.
    pub fn with_component(mut self, component: CppInfo) -> Self {
        self.components.push(component);
        self
    }

    /// Aggregate all components into one record.
    pub fn aggregate(&self) -> CppInfo {
        CppInfo::aggregate(&self.components)
    }
}

/// A fully resolved dependency graph, partitioned by requirement category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyGraph {
    /// Regular requirements
    pub host: Vec<DependencyNode>,

    /// Test-only requirements
    pub test: Vec<DependencyNode>,

    /// Build-only requirements
    pub build: Vec<DependencyNode>,
}

/// A dependency as yielded by the walk: reference plus aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedDependency {
    pub reference: DependencyRef,
    pub info: CppInfo,
}

impl WalkedDependency {
    /// Package name.
    pub fn name(&self) -> &str {
        self.reference.name()
    }
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        DependencyGraph::default()
    }

    /// Append a node to a category.
    pub fn push(&mut self, category: RequireCategory, node: DependencyNode) {
        self.nodes_mut(category).push(node);
    }

    /// Append a host requirement.
    pub fn with_host(mut self, node: DependencyNode) -> Self {
        self.push(RequireCategory::Host, node);
        self
    }

    /// Append a test requirement.
    pub fn with_test(mut self, node: DependencyNode) -> Self {
        self.push(RequireCategory::Test, node);
        self
    }

    /// Append a build requirement.
    pub fn with_build(mut self, node: DependencyNode) -> Self {
        self.push(RequireCategory::Build, node);
        self
    }

    /// Nodes declared under a category, in graph order.
    pub fn nodes(&self, category: RequireCategory) -> &[DependencyNode] {
        match category {
            RequireCategory::Host => &self.host,
            RequireCategory::Test => &self.test,
            RequireCategory::Build => &self.build,
        }
    }

    fn nodes_mut(&mut self, category: RequireCategory) -> &mut Vec<DependencyNode> {
        match category {
            RequireCategory::Host => &mut self.host,
            RequireCategory::Test => &mut self.test,
            RequireCategory::Build => &mut self.build,
        }
    }

    /// Total number of nodes across all categories.
    pub fn len(&self) -> usize {
        self.host.len() + self.test.len() + self.build.len()
    }

    /// Check if the graph has no dependencies at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all nodes in walk order (host, test, build) with their
    /// category.
    pub fn iter(&self) -> impl Iterator<Item = (RequireCategory, &DependencyNode)> {
        RequireCategory::ALL.into_iter().flat_map(move |category| {
            self.nodes(category).iter().map(move |node| (category, node))
        })
    }

    /// Walk the graph and aggregate every dependency.
    ///
    /// Order is host, test, build, each in graph order. A name seen in an
    /// earlier category is not visited again. An empty graph yields an empty
    /// list; the export still emits an empty root.
    pub fn walk(&self) -> Vec<WalkedDependency> {
        if self.is_empty() {
            tracing::warn!("dependency graph is empty, exporting an empty root");
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut walked = Vec::with_capacity(self.len());

        for (category, node) in self.iter() {
            let reference = DependencyRef::new(node.name.as_str(), category);
            if !seen.insert(node.name.as_str()) {
                tracing::debug!(
                    "skipping {}: already visited under an earlier category",
                    reference
                );
                continue;
            }

            walked.push(WalkedDependency {
                info: node.aggregate(),
                reference,
            });
        }

        walked
    }
}
