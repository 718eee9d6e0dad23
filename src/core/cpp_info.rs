//! Per-component build metadata and its aggregation.
//!
//! A package exposes one or more components, each carrying its own compile
//! and link facts. Exporting works on the aggregate: every field of every
//! component concatenated in component order.
//!
//! Paths are kept as plain strings rather than `PathBuf`. They come from
//! another host's package cache and may use either separator, so they are
//! normalized textually when rendered.

use serde::{Deserialize, Serialize};

/// Build metadata of one component, or the aggregate of several.
///
/// Every field is an ordered list that defaults to empty, so a component
/// that omits a field is indistinguishable from one that declares it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CppInfo {
    /// Include directories
    pub includedirs: Vec<String>,

    /// Library search directories
    pub libdirs: Vec<String>,

    /// Binary directories
    pub bindirs: Vec<String>,

    /// Resource directories
    pub resdirs: Vec<String>,

    /// Source directories
    pub srcdirs: Vec<String>,

    /// macOS framework search directories
    pub frameworkdirs: Vec<String>,

    /// Libraries to link, by name
    pub libs: Vec<String>,

    /// macOS frameworks, by name
    pub frameworks: Vec<String>,

    /// System libraries (pthread, m, ws2_32, ...)
    pub system_libs: Vec<String>,

    /// Preprocessor defines, `NAME` or `NAME=value`
    pub defines: Vec<String>,

    /// C++ compiler flags
    pub cxxflags: Vec<String>,

    /// C compiler flags
    pub cflags: Vec<String>,

    /// Linker flags for shared libraries
    pub sharedlinkflags: Vec<String>,

    /// Linker flags for executables
    pub exelinkflags: Vec<String>,
}

impl CppInfo {
    /// Create an empty record.
    pub fn new() -> Self {
        CppInfo::default()
    }

    /// Aggregate several components into one record.
    ///
    /// Each field of the result is the concatenation of that field across
    /// `components`, in iteration order. Nothing is deduplicated or sorted.
    pub fn aggregate<'a>(components: impl IntoIterator<Item = &'a CppInfo>) -> CppInfo {
        let mut aggregate = CppInfo::new();
        for component in components {
            aggregate.merge(component);
        }
        aggregate
    }

    /// Append another record's fields to this one.
    pub fn merge(&mut self, other: &CppInfo) {
        self.includedirs.extend(other.includedirs.iter().cloned());
        self.libdirs.extend(other.libdirs.iter().cloned());
        self.bindirs.extend(other.bindirs.iter().cloned());
        self.resdirs.extend(other.resdirs.iter().cloned());
        self.srcdirs.extend(other.srcdirs.iter().cloned());
        self.frameworkdirs.extend(other.frameworkdirs.iter().cloned());
        self.libs.extend(other.libs.iter().cloned());
        self.frameworks.extend(other.frameworks.iter().cloned());
        self.system_libs.extend(other.system_libs.iter().cloned());
        self.defines.extend(other.defines.iter().cloned());
        self.cxxflags.extend(other.cxxflags.iter().cloned());
        self.cflags.extend(other.cflags.iter().cloned());
        self.sharedlinkflags.extend(other.sharedlinkflags.iter().cloned());
        self.exelinkflags.extend(other.exelinkflags.iter().cloned());
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.includedirs.is_empty()
            && self.libdirs.is_empty()
            && self.bindirs.is_empty()
            && self.resdirs.is_empty()
            && self.srcdirs.is_empty()
            && self.frameworkdirs.is_empty()
            && self.libs.is_empty()
            && self.frameworks.is_empty()
            && self.system_libs.is_empty()
            && self.defines.is_empty()
            && self.cxxflags.is_empty()
            && self.cflags.is_empty()
            && self.sharedlinkflags.is_empty()
            && self.exelinkflags.is_empty()
    }

    /// Add an include directory.
    pub fn with_includedir(mut self, dir: impl Into<String>) -> Self {
        self.includedirs.push(dir.into());
        self
    }

    /// Add a library search directory.
    pub fn with_libdir(mut self, dir: impl Into<String>) -> Self {
        self.libdirs.push(dir.into());
        self
    }

    /// Add a library to link.
    pub fn with_lib(mut self, lib: impl Into<String>) -> Self {
        self.libs.push(lib.into());
        self
    }

    /// Add a system library.
    pub fn with_system_lib(mut self, lib: impl Into<String>) -> Self {
        self.system_libs.push(lib.into());
        self
    }

    /// Add a preprocessor define.
    pub fn with_define(mut self, define: impl Into<String>) -> Self {
        self.defines.push(define.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_concatenates_in_order() {
        let core = CppInfo::new()
            .with_includedir("/pkg/include")
            .with_lib("ssl")
            .with_define("OPENSSL_CORE");
        let crypto = CppInfo::new()
            .with_includedir("/pkg/include")
            .with_lib("crypto")
            .with_system_lib("dl");

        let agg = CppInfo::aggregate([&core, &crypto]);

        // duplicates are kept
        assert_eq!(agg.includedirs, vec!["/pkg/include", "/pkg/include"]);
        assert_eq!(agg.libs, vec!["ssl", "crypto"]);
        assert_eq!(agg.system_libs, vec!["dl"]);
        assert_eq!(agg.defines, vec!["OPENSSL_CORE"]);
        assert!(agg.cflags.is_empty());
    }

    #[test]
    fn test_aggregate_of_nothing_is_empty() {
        let agg = CppInfo::aggregate(std::iter::empty::<&CppInfo>());
        assert!(agg.is_empty());
        assert_eq!(agg, CppInfo::default());
    }

    #[test]
    fn test_merge_covers_every_field() {
        let full = CppInfo {
            includedirs: vec!["i".into()],
            libdirs: vec!["l".into()],
            bindirs: vec!["b".into()],
            resdirs: vec!["r".into()],
            srcdirs: vec!["s".into()],
            frameworkdirs: vec!["fd".into()],
            libs: vec!["lib".into()],
            frameworks: vec!["fw".into()],
            system_libs: vec!["sys".into()],
            defines: vec!["D".into()],
            cxxflags: vec!["-std=c++17".into()],
            cflags: vec!["-std=c99".into()],
            sharedlinkflags: vec!["-shared".into()],
            exelinkflags: vec!["-pie".into()],
        };

        let mut merged = CppInfo::new();
        merged.merge(&full);
        assert_eq!(merged, full);

        merged.merge(&full);
        assert_eq!(merged.exelinkflags, vec!["-pie", "-pie"]);
        assert_eq!(merged.frameworkdirs, vec!["fd", "fd"]);
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let info: CppInfo = toml::from_str(
            r#"
includedirs = ["C:\\inc"]
libs = ["z"]
"#,
        )
        .unwrap();

        assert_eq!(info.includedirs, vec!["C:\\inc"]);
        assert_eq!(info.libs, vec!["z"]);
        assert!(info.defines.is_empty());
        assert!(info.exelinkflags.is_empty());
    }
}
