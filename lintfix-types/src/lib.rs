//! Shared data types for the lintfix workspace.
//!
//! # Design constraints
//! - `Finding` is the unit of work handed between crates; keep it plain data.
//! - Lines are 1-indexed, columns are 0-indexed offsets into the line.

use camino::Utf8PathBuf;

/// One linter-reported issue.
///
/// `col` is measured against the line's content at the time the diagnostic was
/// produced. All findings for a file are collected before any edit is applied,
/// so when a sibling edit on the same line lands first, the edit engine rewrites
/// `col` to keep it valid against the mutated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path of the file the diagnostic refers to (grouping key).
    pub file: Utf8PathBuf,

    /// 1-indexed line number.
    pub line: usize,

    /// 0-indexed character offset into the line.
    pub col: usize,

    /// Diagnostic text, trailing period stripped.
    pub message: String,

    /// Rule that produced the diagnostic, e.g. `comma-dangle`.
    pub rule: String,
}
