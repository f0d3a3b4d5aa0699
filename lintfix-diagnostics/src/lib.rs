//! Diagnostic stream ingestion.
//!
//! lintfix consumes the textual output of a linter run. It is intentionally
//! *tolerant* when reading that stream:
//! - Lines that do not match the diagnostic grammar are skipped.
//! - Numeric fields that do not fit a `usize` skip the line, not the run.
//!
//! The linter is responsible for its own output discipline; lintfix's job is to
//! be useful with the stream "as found".

mod aggregate;
mod parse;

pub use aggregate::{FileFindings, FindingSet, collect_findings};
pub use parse::parse_line;
