//! Edit engine for lintfix.
//!
//! Responsibilities:
//! - Hold a file's content as a 1-indexed [`LineBuffer`].
//! - Classify each finding into a [`Repair`] and apply it in stream order.
//! - Propagate offsets: every applied edit shifts the recorded columns of the
//!   not-yet-applied findings on the same line, so positions reported against
//!   the original text stay valid against the mutated text.
//! - Render the before/after trace block.

mod repair;
mod splice;

pub use repair::Repair;
pub use splice::{SpliceError, splice};

use camino::Utf8Path;
use lintfix_types::Finding;
use tracing::{debug, warn};

/// A file's content as an ordered sequence of mutable lines.
///
/// Lines are addressed 1-based to match `Finding::line`. Content round-trips
/// exactly: split on `\n`, join with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn to_content(&self) -> String {
        self.lines.join("\n")
    }

    /// 1-based line lookup.
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    fn line_mut(&mut self, line: usize) -> Option<&mut String> {
        line.checked_sub(1).and_then(|i| self.lines.get_mut(i))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// One applied edit, in trace order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdit {
    /// 1-indexed line the edit landed on.
    pub line: usize,
    /// Column as reported by the finding (after any propagation shifts).
    pub col: usize,
    /// Action description, e.g. `remove character at 3, 5`.
    pub description: String,
    /// Line text before the edit.
    pub before: String,
    /// Line text after the edit.
    pub after: String,
}

/// Apply every finding's repair to `buffer`, in order.
///
/// The findings are consumed: after an edit changes a line's length, the
/// columns of the not-yet-applied findings on that line are shifted by the
/// length delta so they address the mutated text. Findings with no registered
/// repair, or whose position no longer supports one, are skipped; the engine
/// itself never fails.
pub fn apply_findings(buffer: &mut LineBuffer, mut findings: Vec<Finding>) -> Vec<AppliedEdit> {
    let mut edits = Vec::new();

    for i in 0..findings.len() {
        let finding = &findings[i];
        let Some(repair) = Repair::for_finding(finding) else {
            debug!(rule = %finding.rule, message = %finding.message, "no repair registered");
            continue;
        };
        let (line_no, col) = (finding.line, finding.col);

        let Some(line) = buffer.line_mut(line_no) else {
            warn!(line = line_no, "finding addresses a line outside the buffer");
            continue;
        };

        let Some((range, replacement)) = repair.resolve(line, col) else {
            warn!(
                line = line_no,
                col,
                ?repair,
                "reported column no longer supports this repair"
            );
            continue;
        };

        let before = line.clone();
        let delta = match splice(line, range, replacement) {
            Ok(delta) => delta,
            Err(err) => {
                warn!(line = line_no, col, %err, "splice rejected");
                continue;
            }
        };
        let after = line.clone();

        edits.push(AppliedEdit {
            line: line_no,
            col,
            description: repair.describe(line_no, col),
            before,
            after,
        });

        if delta != 0 {
            shift_pending(&mut findings[i + 1..], line_no, col, delta);
        }
    }

    edits
}

/// Offset propagation: every pending finding on `line` strictly past `col`
/// moves by `delta`, saturating at column 0.
fn shift_pending(pending: &mut [Finding], line: usize, col: usize, delta: isize) {
    for f in pending.iter_mut() {
        if f.line == line && f.col > col {
            f.col = f.col.saturating_add_signed(delta);
        }
    }
}

/// Render the per-file trace block exactly as it is printed:
/// a `[<file>]` header, then per edit the action line bracketed by blank lines
/// and the before/after snapshots, closed by one blank line.
pub fn render_trace(path: &Utf8Path, edits: &[AppliedEdit]) -> String {
    let mut out = format!("[{path}]\n");
    for edit in edits {
        out.push_str(&format!(
            "\naction: {}\n\n{}\n{}\n",
            edit.description, edit.before, edit.after
        ));
    }
    out.push('\n');
    out
}
