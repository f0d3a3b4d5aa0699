use std::collections::HashMap;
use std::io::BufRead;

use anyhow::Context;
use camino::Utf8PathBuf;
use lintfix_types::Finding;
use tracing::debug;

use crate::parse::parse_line;

/// All findings for one file, in the order the diagnostic stream reported them.
#[derive(Debug, Clone)]
pub struct FileFindings {
    pub path: Utf8PathBuf,
    pub findings: Vec<Finding>,
}

/// Findings grouped by file path.
///
/// Groups keep the order files first appear in the stream, and findings within
/// a group keep stream order. Edits for the same line must be applied in stream
/// order for offset propagation to stay consistent, so neither level is sorted.
#[derive(Debug, Default)]
pub struct FindingSet {
    groups: Vec<FileFindings>,
    index: HashMap<Utf8PathBuf, usize>,
}

impl FindingSet {
    pub fn push(&mut self, finding: Finding) {
        match self.index.get(&finding.file) {
            Some(&i) => self.groups[i].findings.push(finding),
            None => {
                self.index.insert(finding.file.clone(), self.groups.len());
                self.groups.push(FileFindings {
                    path: finding.file.clone(),
                    findings: vec![finding],
                });
            }
        }
    }

    /// Number of files with at least one finding.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileFindings> {
        self.groups.iter()
    }

    /// Consume the set, yielding file groups in first-appearance order.
    pub fn into_groups(self) -> Vec<FileFindings> {
        self.groups
    }
}

/// Read a diagnostic stream to the end, grouping findings by file.
///
/// Lines that are not diagnostics are skipped. Read errors are fatal: the input
/// source was explicitly designated, so a broken stream is not recoverable.
pub fn collect_findings(reader: impl BufRead) -> anyhow::Result<FindingSet> {
    let mut set = FindingSet::default();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.context("read diagnostic stream")?;
        match parse_line(&line) {
            Some(finding) => set.push(finding),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "ignored non-diagnostic lines");
    }
    Ok(set)
}
