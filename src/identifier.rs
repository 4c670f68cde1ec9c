//! Symbol names derived from the input path.
//!
//! The file name (everything after the last `/`) is cut at its first `.` and
//! every byte outside `[0-9A-Za-z]` becomes `_`. Nothing stops the result from
//! starting with a digit or colliding with a C++ keyword; callers that feed in
//! such names get such identifiers back.

/// Names used for the generated declarations and the include guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Base name for `<ident>_char`, `<ident>_len` and the view itself.
    pub ident: String,
    /// Upper-cased `ident`; the guard macro is `_<guard>`.
    pub guard: String,
}

impl Symbol {
    pub fn from_path(path: &str) -> Self {
        Self::from_bytes(path.as_bytes())
    }

    /// Same as [`Symbol::from_path`] for paths that need not be UTF-8.
    pub fn from_bytes(path: &[u8]) -> Self {
        let ident = make_identifier(file_name(path));
        let guard = make_guard_name(&ident);
        Symbol { ident, guard }
    }

    pub fn guard_macro(&self) -> String {
        format!("_{}", self.guard)
    }
}

/// Part of `path` after the last `/`, or the whole string.
fn file_name(path: &[u8]) -> &[u8] {
    match path.iter().rposition(|&b| b == b'/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

pub fn make_identifier(name: &[u8]) -> String {
    name.iter()
        .copied()
        .take_while(|&b| b != b'.')
        .map(|b| if b.is_ascii_alphanumeric() { b as char } else { '_' })
        .collect()
}

pub fn make_guard_name(ident: &str) -> String {
    ident.to_ascii_uppercase()
}
