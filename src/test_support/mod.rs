//! Graph fixtures for unit tests.

use crate::core::context::BuildContext;
use crate::core::cpp_info::CppInfo;
use crate::core::graph::{DependencyGraph, DependencyNode};

/// Build context used by most tests.
pub fn windows_release() -> BuildContext {
    BuildContext::new("Windows", "x86_64", "Release")
}

/// A small graph covering every category.
///
/// host: app, zlib, openssl (two components); test: gtest; build: nasm.
pub fn sample_graph() -> DependencyGraph {
    let app = DependencyNode::new("app").with_component(
        CppInfo::new()
            .with_includedir("C:\\work\\app\\include")
            .with_define("APP_STATIC"),
    );

    let zlib = DependencyNode::new("zlib").with_component(
        CppInfo::new()
            .with_includedir("C:\\inc")
            .with_libdir("C:\\lib")
            .with_lib("z"),
    );

    let openssl = DependencyNode::new("openssl")
        .with_component(
            CppInfo::new()
                .with_includedir("C:\\openssl\\include")
                .with_lib("ssl")
                .with_system_lib("dl"),
        )
        .with_component(
            CppInfo::new()
                .with_includedir("C:\\openssl\\include")
                .with_lib("crypto")
                .with_system_lib("pthread"),
        );

    let gtest = DependencyNode::new("gtest").with_component(CppInfo {
        libs: vec!["gtest".into(), "gtest_main".into()],
        cxxflags: vec!["-std=c++14".into()],
        ..Default::default()
    });

    let nasm = DependencyNode::new("nasm").with_component(CppInfo {
        bindirs: vec!["C:\\nasm\\bin".into()],
        ..Default::default()
    });

    DependencyGraph::new()
        .with_host(app)
        .with_host(zlib)
        .with_host(openssl)
        .with_test(gtest)
        .with_build(nasm)
}
