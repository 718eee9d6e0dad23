//! Descriptor rendering.
//!
//! A descriptor is one xmake-readable file holding a single Lua table with
//! one block, keyed by the build context:
//!
//! ```text
//! {
//!   Linux_x86_64_Release =
//!   {
//!     includedirs    = {"/p/zlib/include"},
//!     links          = {"z"},
//!     ...
//!   }
//! }
//! ```
//!
//! The root descriptor carries the project's own aggregate plus
//! `__dep_names`, the ordered names of every other dependency.

use crate::core::context::BuildContext;
use crate::core::cpp_info::CppInfo;
use crate::generator::format::{format_list, ListStyle, ValueKind};

/// Default file stem of every descriptor.
pub const DEFAULT_FILE_STEM: &str = "conanbuildinfo";

/// Default file extension of every descriptor.
pub const DEFAULT_EXTENSION: &str = "xmake.lua";

/// How descriptor files are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    /// Common file stem
    pub file_stem: String,
    /// Extension, without the leading dot
    pub extension: String,
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        ArtifactNaming {
            file_stem: DEFAULT_FILE_STEM.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ArtifactNaming {
    /// File name of the root descriptor.
    pub fn root_file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.extension)
    }

    /// File name of a dependency's descriptor.
    ///
    /// Separator and drive characters in the name are percent-encoded so the
    /// file always lands directly in the output directory. `%` is encoded
    /// too, so distinct names never share a file.
    pub fn dependency_file_name(&self, name: &str) -> String {
        let mut encoded = String::with_capacity(name.len());
        for c in name.chars() {
            match c {
                '/' => encoded.push_str("%2F"),
                '\\' => encoded.push_str("%5C"),
                ':' => encoded.push_str("%3A"),
                '%' => encoded.push_str("%25"),
                c => encoded.push(c),
            }
        }
        format!("{}_{}.{}", self.file_stem, encoded, self.extension)
    }
}

/// One rendered descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Dependency the descriptor belongs to, `None` for the root
    pub dependency: Option<String>,
    /// File name inside the output directory
    pub file_name: String,
    /// Full file content
    pub content: String,
}

impl Descriptor {
    /// Render the descriptor of one dependency.
    pub fn for_dependency(
        naming: &ArtifactNaming,
        ctx: &BuildContext,
        name: &str,
        info: &CppInfo,
    ) -> Self {
        Descriptor {
            dependency: Some(name.to_string()),
            file_name: naming.dependency_file_name(name),
            content: render_block(ctx, info, None),
        }
    }

    /// Render the root descriptor.
    pub fn for_root<S: AsRef<str>>(
        naming: &ArtifactNaming,
        ctx: &BuildContext,
        info: &CppInfo,
        dep_names: &[S],
    ) -> Self {
        let dep_names: Vec<&str> = dep_names.iter().map(|n| n.as_ref()).collect();
        Descriptor {
            dependency: None,
            file_name: naming.root_file_name(),
            content: render_block(ctx, info, Some(dep_names.as_slice())),
        }
    }

    /// Check if this is the root descriptor.
    pub fn is_root(&self) -> bool {
        self.dependency.is_none()
    }
}

/// Render a full descriptor: the outer table with one keyed block.
///
/// With `dep_names` set, the block ends with a `__dep_names` field.
pub fn render_block(ctx: &BuildContext, info: &CppInfo, dep_names: Option<&[&str]>) -> String {
    fn paths(values: &[String]) -> String {
        format_list(values, ValueKind::Path, ListStyle::Multiline)
    }
    fn names(values: &[String]) -> String {
        format_list(values, ValueKind::LibraryName, ListStyle::Inline)
    }
    fn flags(values: &[String]) -> String {
        format_list(values, ValueKind::Flag, ListStyle::Inline)
    }

    let mut fields: Vec<(&str, String)> = vec![
        ("includedirs", paths(&info.includedirs)),
        ("linkdirs", paths(&info.libdirs)),
        ("links", names(&info.libs)),
        ("frameworkdirs", paths(&info.frameworkdirs)),
        ("frameworks", names(&info.frameworks)),
        ("syslinks", names(&info.system_libs)),
        (
            "defines",
            format_list(&info.defines, ValueKind::Define, ListStyle::Inline),
        ),
        ("cxxflags", flags(&info.cxxflags)),
        ("cflags", flags(&info.cflags)),
        ("shflags", flags(&info.sharedlinkflags)),
        ("ldflags", flags(&info.exelinkflags)),
        ("__bindirs", paths(&info.bindirs)),
        ("__resdirs", paths(&info.resdirs)),
        ("__srcdirs", paths(&info.srcdirs)),
    ];
    if let Some(dep_names) = dep_names {
        fields.push((
            "__dep_names",
            format_list(dep_names, ValueKind::LibraryName, ListStyle::Inline),
        ));
    }

    let mut out = String::from("{\n");
    out.push_str(&format!("  {} = \n  {{\n", ctx.key()));
    let body: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("    {:<14} = {{{}}}", key, value))
        .collect();
    out.push_str(&body.join(",\n"));
    out.push_str("\n  }\n}");
    out
}
