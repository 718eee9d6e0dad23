//! Dependency references.
//!
//! A DependencyRef identifies one resolved package in the graph together
//! with the requirement category it was reached through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requirement category a dependency was declared under.
///
/// The declaration order of the variants is the walk order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireCategory {
    /// Regular (runtime/host) requirement
    #[default]
    Host,
    /// Test-only requirement
    Test,
    /// Build-only requirement (tools)
    Build,
}

impl RequireCategory {
    /// All categories in walk order.
    pub const ALL: [RequireCategory; 3] = [
        RequireCategory::Host,
        RequireCategory::Test,
        RequireCategory::Build,
    ];

    /// Lowercase identifier of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequireCategory::Host => "host",
            RequireCategory::Test => "test",
            RequireCategory::Build => "build",
        }
    }
}

impl fmt::Display for RequireCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to one package in the resolved graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRef {
    /// Package name, unique per graph
    name: String,

    /// Category the package was required through
    #[serde(default)]
    category: RequireCategory,
}

impl DependencyRef {
    /// Create a new reference.
    pub fn new(name: impl Into<String>, category: RequireCategory) -> Self {
        DependencyRef {
            name: name.into(),
            category,
        }
    }

    /// Create a host requirement reference.
    pub fn host(name: impl Into<String>) -> Self {
        Self::new(name, RequireCategory::Host)
    }

    /// Create a test requirement reference.
    pub fn test(name: impl Into<String>) -> Self {
        Self::new(name, RequireCategory::Test)
    }

    /// Create a build requirement reference.
    pub fn build(name: impl Into<String>) -> Self {
        Self::new(name, RequireCategory::Build)
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the requirement category.
    pub fn category(&self) -> RequireCategory {
        self.category
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_walk_order() {
        assert_eq!(
            RequireCategory::ALL,
            [
                RequireCategory::Host,
                RequireCategory::Test,
                RequireCategory::Build
            ]
        );
    }

    #[test]
    fn test_dependency_ref_display() {
        let dep = DependencyRef::build("protobuf");
        assert_eq!(dep.name(), "protobuf");
        assert_eq!(dep.category(), RequireCategory::Build);
        assert_eq!(dep.to_string(), "protobuf (build)");
    }
}
