//! The resolved frame record and the name handling around it.

#[cfg(test)]
mod tests;

use std::{fmt, path::Path};

use crate::Addr;

/// Separator between the segments of a qualified function name.
pub const SEPARATOR: &str = "::";

/// One resolved stack frame.
///
/// Built fresh by every resolution and never changed afterwards, so the fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerInfo {
    entry: Addr,
    line: u32,
    package: String,
    function: String,
    file: String,
}

impl CallerInfo {
    /// Builds a record from a qualified function name such as `my_crate::net::connect`,
    /// splitting it with [`split_qualified_name`].
    pub fn new(qualified_name: &str, file: impl Into<String>, line: u32, entry: Addr) -> Self {
        let (package, function) = split_qualified_name(qualified_name);
        Self {
            entry,
            line,
            package: package.to_owned(),
            function: function.to_owned(),
            file: file.into(),
        }
    }

    /// Address of the first instruction of the function. [`Addr::NULL`] if the host
    /// could not tell.
    pub fn entry(&self) -> Addr {
        self.entry
    }

    /// The line being executed in this frame, `0` if there is no line info.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Module path of the function, empty for unqualified names.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file as recorded in the debug info, `?` if there is none.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The last segment of [`package`](Self::package): `net` for `my_crate::net`.
    pub fn package_base_name(&self) -> &str {
        split_qualified_name(&self.package).1
    }

    /// The file name without its directories.
    pub fn file_base_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// `package_base.function`
    pub fn short_label(&self) -> String {
        format!("{}.{}", self.package_base_name(), self.function)
    }

    /// `file:line->package_base.function`
    pub fn debug_label(&self) -> String {
        format!(
            "{}:{}->{}.{}",
            self.file,
            self.line,
            self.package_base_name(),
            self.function
        )
    }

    /// Reassembles the name the record was built from.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.function.clone()
        } else {
            format!("{}{SEPARATOR}{}", self.package, self.function)
        }
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package_base_name(), self.function)
    }
}

/// Splits `a::b::c` into `("a::b", "c")`.
///
/// Only separators outside of angle brackets count, so
/// `<my_crate::Foo as core::fmt::Debug>::fmt` splits into the impl qualifier and `fmt`.
/// A name without a separator, or with only a leading one, has an empty module path.
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match last_separator(name) {
        Some(at) if at > 0 && at + SEPARATOR.len() < name.len() => {
            (&name[..at], &name[at + SEPARATOR.len()..])
        }
        _ => ("", name),
    }
}

fn last_separator(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    let mut depth = 0usize;
    let mut last = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` in fn pointer types does not close a bracket
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                last = Some(i);
                i += 2;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    last
}
