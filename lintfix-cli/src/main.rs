use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use fs_err as fs;
use lintfix_diagnostics::{FileFindings, collect_findings};
use lintfix_edit::{LineBuffer, apply_findings, render_trace};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "lintfix",
    version,
    about = "Applies automatic corrections for linter diagnostics, in place."
)]
struct Cli {
    /// File holding the linter output. Reads standard input when omitted.
    input: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = fs::File::open(path).with_context(|| format!("open {}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let findings = collect_findings(reader).context("collect findings")?;
    debug!(files = findings.len(), "diagnostic stream grouped");

    for group in findings.into_groups() {
        fix_file(group);
    }

    Ok(())
}

/// Load one file, apply its findings, print the trace, write the result back.
///
/// Failures here never escalate: an unreadable file drops its findings and
/// reports itself on stdout, a failed write-back is logged, and processing
/// moves on to the next file.
fn fix_file(group: FileFindings) {
    let FileFindings { path, findings } = group;

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            println!("couldn't open {:?}", path);
            return;
        }
    };

    let mut buffer = LineBuffer::from_content(&contents);
    let edits = apply_findings(&mut buffer, findings);
    print!("{}", render_trace(&path, &edits));

    if let Err(e) = fs::write(&path, buffer.to_content()) {
        error!(file = %path, "write back failed: {e}");
    }
}
