//! Classification of findings into concrete line repairs.
//!
//! The rule/message table is fixed: these are the mechanical violations whose
//! correction never needs to understand the linted language. Everything else
//! maps to `None` and is left alone.

use std::ops::Range;

use lintfix_types::Finding;

/// A transformation the engine knows how to apply at a reported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// comma-dangle "Unexpected trailing comma": delete the character at the column.
    RemoveChar,
    /// comma-dangle "Missing trailing comma": insert `,` before the column.
    AddComma,
    /// comma-spacing / key-spacing: insert one space at the column.
    AddSpace,
    /// no-multi-spaces: collapse the space run ending at the column to one space.
    CollapseSpaces,
    /// space-in-brackets "no space after": strip the space run after the column.
    StripSpacesAfter,
    /// space-in-brackets "no space before": strip the space run before the column.
    StripSpacesBefore,
}

impl Repair {
    /// Look up the repair for a finding. Unknown rule/message pairs map to `None`.
    pub fn for_finding(finding: &Finding) -> Option<Repair> {
        let msg = finding.message.as_str();
        match finding.rule.as_str() {
            "comma-dangle" if msg == "Unexpected trailing comma" => Some(Repair::RemoveChar),
            "comma-dangle" if msg == "Missing trailing comma" => Some(Repair::AddComma),
            "comma-spacing" if msg.starts_with("A space is required after") => {
                Some(Repair::AddSpace)
            }
            "key-spacing" if msg.starts_with("Missing space before value for key") => {
                Some(Repair::AddSpace)
            }
            "no-multi-spaces" if msg.starts_with("Multiple spaces found") => {
                Some(Repair::CollapseSpaces)
            }
            "space-in-brackets" if msg.starts_with("There should be no space after") => {
                Some(Repair::StripSpacesAfter)
            }
            "space-in-brackets" if msg.starts_with("There should be no space before") => {
                Some(Repair::StripSpacesBefore)
            }
            _ => None,
        }
    }

    /// Compute the splice this repair performs on `line` at column `col`.
    ///
    /// Whitespace runs are measured here, at application time: the diagnostic's
    /// column is only an anchor inside or adjacent to the run, not its bounds.
    /// Scans clamp at the line's ends. `None` means the reported position does
    /// not support the repair (stale column, or no run to remove).
    pub(crate) fn resolve(self, line: &str, col: usize) -> Option<(Range<usize>, &'static str)> {
        let bytes = line.as_bytes();
        if col > bytes.len() {
            return None;
        }

        match self {
            Repair::RemoveChar => (col < bytes.len()).then(|| (col..col + 1, "")),
            Repair::AddComma => Some((col..col, ",")),
            Repair::AddSpace => Some((col..col, " ")),
            Repair::CollapseSpaces => {
                let start = space_run_start(bytes, col);
                (start < col).then(|| (start..col, " "))
            }
            Repair::StripSpacesAfter => {
                let from = col + 1;
                if from > bytes.len() {
                    return None;
                }
                let end = space_run_end(bytes, from);
                (end > from).then(|| (from..end, ""))
            }
            Repair::StripSpacesBefore => {
                let start = space_run_start(bytes, col);
                (start < col).then(|| (start..col, ""))
            }
        }
    }

    /// Action description, exactly as printed in the trace.
    pub(crate) fn describe(self, line: usize, col: usize) -> String {
        match self {
            Repair::RemoveChar => format!("remove character at {line}, {col}"),
            Repair::AddComma => format!("add comma at {line}, {col}"),
            Repair::AddSpace => format!("add space at {line}, {col}"),
            Repair::CollapseSpaces | Repair::StripSpacesBefore => {
                format!("remove spaces before {line}, {col}")
            }
            Repair::StripSpacesAfter => format!("remove spaces after {line}, {col}"),
        }
    }
}

/// First index of the space run ending just before `col`; equals `col` when the
/// preceding character is not a space. Stops at the start of the line.
fn space_run_start(bytes: &[u8], col: usize) -> usize {
    let mut start = col;
    while start > 0 && bytes[start - 1] == b' ' {
        start -= 1;
    }
    start
}

/// One past the last index of the space run starting at `from`; equals `from`
/// when there is no space there. Stops at the end of the line.
fn space_run_end(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while end < bytes.len() && bytes[end] == b' ' {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::Repair;
    use camino::Utf8PathBuf;
    use lintfix_types::Finding;
    use pretty_assertions::assert_eq;

    fn finding(rule: &str, message: &str) -> Finding {
        Finding {
            file: Utf8PathBuf::from("a.js"),
            line: 1,
            col: 0,
            message: message.to_string(),
            rule: rule.to_string(),
        }
    }

    #[test]
    fn classifies_the_known_table() {
        let cases = [
            ("comma-dangle", "Unexpected trailing comma", Repair::RemoveChar),
            ("comma-dangle", "Missing trailing comma", Repair::AddComma),
            ("comma-spacing", "A space is required after ','", Repair::AddSpace),
            (
                "key-spacing",
                "Missing space before value for key 'name'",
                Repair::AddSpace,
            ),
            (
                "no-multi-spaces",
                "Multiple spaces found before 'b'",
                Repair::CollapseSpaces,
            ),
            (
                "space-in-brackets",
                "There should be no space after '['",
                Repair::StripSpacesAfter,
            ),
            (
                "space-in-brackets",
                "There should be no space before ']'",
                Repair::StripSpacesBefore,
            ),
        ];
        for (rule, message, expected) in cases {
            assert_eq!(Repair::for_finding(&finding(rule, message)), Some(expected));
        }
    }

    #[test]
    fn unknown_rules_and_messages_are_unhandled() {
        assert_eq!(Repair::for_finding(&finding("semi", "Missing semicolon")), None);
        assert_eq!(
            Repair::for_finding(&finding("comma-dangle", "Something else entirely")),
            None
        );
        // Exact-match messages do not prefix-match.
        assert_eq!(
            Repair::for_finding(&finding("comma-dangle", "Unexpected trailing comma here")),
            None
        );
    }

    #[test]
    fn collapse_measures_the_backward_run() {
        assert_eq!(
            Repair::CollapseSpaces.resolve("a,   b", 5),
            Some((2..5, " "))
        );
        // Run reaching the start of the line clamps at 0.
        assert_eq!(Repair::CollapseSpaces.resolve("   x", 3), Some((0..3, " ")));
    }

    #[test]
    fn collapse_without_preceding_space_is_refused() {
        assert_eq!(Repair::CollapseSpaces.resolve("ab", 1), None);
        assert_eq!(Repair::CollapseSpaces.resolve("ab", 0), None);
    }

    #[test]
    fn strip_after_measures_the_forward_run() {
        assert_eq!(Repair::StripSpacesAfter.resolve("[  1]", 0), Some((1..3, "")));
        // Run reaching the end of the line clamps at the length.
        assert_eq!(Repair::StripSpacesAfter.resolve("x,  ", 1), Some((2..4, "")));
        assert_eq!(Repair::StripSpacesAfter.resolve("[1]", 0), None);
    }

    #[test]
    fn strip_before_measures_the_backward_run() {
        assert_eq!(Repair::StripSpacesBefore.resolve("[1 ]", 3), Some((2..3, "")));
        assert_eq!(Repair::StripSpacesBefore.resolve("[1]", 2), None);
    }

    #[test]
    fn stale_columns_are_refused() {
        assert_eq!(Repair::RemoveChar.resolve("ab", 2), None);
        assert_eq!(Repair::RemoveChar.resolve("ab", 9), None);
        assert_eq!(Repair::AddComma.resolve("ab", 9), None);
        assert_eq!(Repair::StripSpacesAfter.resolve("", 0), None);
    }

    #[test]
    fn insertions_at_line_end_are_allowed() {
        assert_eq!(Repair::AddComma.resolve("ab", 2), Some((2..2, ",")));
        assert_eq!(Repair::AddSpace.resolve("", 0), Some((0..0, " ")));
    }
}
