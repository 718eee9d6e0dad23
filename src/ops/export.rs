//! The export operation.
//!
//! Walks the dependency graph, renders one descriptor per dependency plus
//! the root descriptor, and writes them in that order. The first walked
//! dependency is the root package: its aggregate is the project's own and
//! it is left out of `__dep_names`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::context::BuildContext;
use crate::core::cpp_info::CppInfo;
use crate::core::graph::DependencyGraph;
use crate::generator::descriptor::{ArtifactNaming, Descriptor};
use crate::util::config::ExportConfig;

/// Errors that abort an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create output directory `{}`", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A descriptor could not be written. Earlier descriptors stay on disk.
    #[error("failed to write descriptor `{}`", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every descriptor of one export, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExport {
    /// Name of the root package, `None` for an empty graph
    pub root_package: Option<String>,

    /// Non-root dependency names in walk order
    pub dep_names: Vec<String>,

    /// Dependency descriptors followed by the root descriptor
    pub descriptors: Vec<Descriptor>,
}

impl RenderedExport {
    /// The root descriptor.
    pub fn root(&self) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.is_root())
    }

    /// The descriptor of a named dependency.
    pub fn dependency(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors
            .iter()
            .find(|d| d.dependency.as_deref() == Some(name))
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Name of the root package, `None` for an empty graph
    pub root_package: Option<String>,

    /// Non-root dependency names in walk order
    pub dep_names: Vec<String>,

    /// Written files, root descriptor last
    pub written: Vec<PathBuf>,
}

/// Render every descriptor without touching the filesystem.
pub fn render(
    graph: &DependencyGraph,
    ctx: &BuildContext,
    naming: &ArtifactNaming,
) -> RenderedExport {
    let walked = graph.walk();

    let mut descriptors = Vec::with_capacity(walked.len() + 1);
    let mut dep_names = Vec::new();
    for dep in &walked {
        descriptors.push(Descriptor::for_dependency(naming, ctx, dep.name(), &dep.info));
    }
    for dep in walked.iter().skip(1) {
        dep_names.push(dep.name().to_string());
    }

    let empty = CppInfo::new();
    let root_info = walked.first().map(|root| &root.info).unwrap_or(&empty);
    descriptors.push(Descriptor::for_root(naming, ctx, root_info, &dep_names));

    RenderedExport {
        root_package: walked.first().map(|root| root.name().to_string()),
        dep_names,
        descriptors,
    }
}

/// Export the graph into `config`'s output directory.
///
/// Existing descriptors are overwritten. The first failed write aborts the
/// export; nothing already written is rolled back.
pub fn export(
    graph: &DependencyGraph,
    ctx: &BuildContext,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError> {
    let output_dir = config.output_dir();
    tracing::info!(
        "Exporting {} dependencies for {} to {}",
        graph.len(),
        ctx,
        output_dir.display()
    );

    let rendered = render(graph, ctx, &config.naming());

    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(rendered.descriptors.len());
    for descriptor in &rendered.descriptors {
        written.push(write_descriptor(output_dir, descriptor)?);
    }

    tracing::info!(
        "Wrote {} descriptors (root package: {})",
        written.len(),
        rendered.root_package.as_deref().unwrap_or("<none>")
    );

    Ok(ExportReport {
        root_package: rendered.root_package,
        dep_names: rendered.dep_names,
        written,
    })
}

/// Write one descriptor, replacing any existing file.
fn write_descriptor(output_dir: &Path, descriptor: &Descriptor) -> Result<PathBuf, ExportError> {
    let path = output_dir.join(&descriptor.file_name);
    tracing::debug!(
        "{}: {}\n{}",
        descriptor.dependency.as_deref().unwrap_or("<root>"),
        path.display(),
        descriptor.content
    );

    std::fs::write(&path, &descriptor.content).map_err(|source| ExportError::ArtifactWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
