//! Check content integrity

use anyhow::Result;

use crate::check;
use crate::Workspace;

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Run all content checks and print the report.
/// Returns an error when any error-severity issue exists, so the process
/// exits non-zero.
pub fn run(workspace: &Workspace, format: Format) -> Result<()> {
    let report = check::run(workspace)?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print!("{}", report.render_text()),
    }

    let errors = report.error_count();
    if errors > 0 {
        anyhow::bail!("content check failed with {} error(s)", errors);
    }

    Ok(())
}
