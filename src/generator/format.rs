//! Value formatting for xmake descriptor files.
//!
//! Descriptors are Lua table literals, so every value ends up as a
//! double-quoted Lua string. Paths additionally get their separators
//! normalized to `/` so the same file reads identically on every host.

use std::fmt;

/// What kind of value is being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Filesystem path, separators are normalized
    Path,
    /// Library, framework or system library name
    LibraryName,
    /// Compiler or linker flag
    Flag,
    /// Preprocessor define
    Define,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Path => write!(f, "path"),
            ValueKind::LibraryName => write!(f, "library name"),
            ValueKind::Flag => write!(f, "flag"),
            ValueKind::Define => write!(f, "define"),
        }
    }
}

/// How formatted tokens of a list are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One token per line (`,\n`), used for path lists
    Multiline,
    /// Tokens on one line (`, `), used for short lists
    Inline,
}

impl ListStyle {
    /// Separator placed between two tokens.
    pub fn separator(&self) -> &'static str {
        match self {
            ListStyle::Multiline => ",\n",
            ListStyle::Inline => ", ",
        }
    }
}

/// Replace every backslash separator with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Escape a value for the body of a double-quoted Lua string.
///
/// Backslash is escaped first so the escapes added afterwards stay intact.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a single value as a quoted token.
pub fn format_value(value: &str, kind: ValueKind) -> String {
    let body = match kind {
        ValueKind::Path => escape(&normalize_separators(value)),
        ValueKind::LibraryName | ValueKind::Flag | ValueKind::Define => escape(value),
    };
    format!("\"{}\"", body)
}

/// Format a list of values and join the tokens.
///
/// An empty list formats as an empty string, which renders as `{}`.
pub fn format_list<S: AsRef<str>>(values: &[S], kind: ValueKind, style: ListStyle) -> String {
    values
        .iter()
        .map(|v| format_value(v.as_ref(), kind))
        .collect::<Vec<_>>()
        .join(style.separator())
}
