use camino::Utf8PathBuf;
use lintfix_types::Finding;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Grammar of one diagnostic line:
/// `<file>: line <N>, col <N>, Warning|Error - <message> (<rule>)`.
static DIAGNOSTIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?): line (\d+), col (\d+), (?:Warning|Error) - (.+?) \((.+?)\)$")
        .expect("diagnostic grammar regex")
});

/// Parse one line of linter output into a [`Finding`].
///
/// Returns `None` for anything that is not a usable diagnostic: lines that do
/// not match the grammar, and lines whose line/col fields do not fit a `usize`.
/// Trailing periods on the message are stripped so it can be matched against
/// the repair table verbatim.
pub fn parse_line(input: &str) -> Option<Finding> {
    let caps = DIAGNOSTIC_LINE.captures(input)?;

    let line = match caps[2].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            debug!(input, "line number not usable, skipping diagnostic");
            return None;
        }
    };
    let col = match caps[3].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            debug!(input, "column not usable, skipping diagnostic");
            return None;
        }
    };

    Some(Finding {
        file: Utf8PathBuf::from(&caps[1]),
        line,
        col,
        message: caps[4].trim_end_matches('.').to_string(),
        rule: caps[5].to_string(),
    })
}
