//! xmake descriptor generation.
//!
//! Turns aggregated dependency metadata into Lua table literals that xmake
//! loads as package build info.

pub mod descriptor;
pub mod format;

pub use descriptor::{render_block, ArtifactNaming, Descriptor};
pub use format::{format_list, format_value, ListStyle, ValueKind};
