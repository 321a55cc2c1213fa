use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use oasgate_core::ClassificationState;
use oasgate_report::{clip, SINK_BUDGET_BYTES};

/// Append the clipped markdown report to the platform's job-summary file.
/// No configured path means the sink is absent, which is a no-op.
pub fn append_job_summary(summary_path: Option<&Path>, markdown: &str) -> Result<()> {
    let Some(path) = summary_path else {
        tracing::debug!("no job summary sink configured");
        return Ok(());
    };
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open job summary {}", path.display()))?;
    f.write_all(&clip(markdown, SINK_BUDGET_BYTES))?;
    f.write_all(b"\n")?;
    Ok(())
}

/// Append `key=value` output variables for the surrounding workflow.
/// Absent path is a no-op, as with the summary sink.
pub fn write_output_vars(
    output_path: Option<&Path>,
    state: ClassificationState,
    comment_file: &Path,
) -> Result<()> {
    let Some(path) = output_path else {
        tracing::debug!("no output-variable sink configured");
        return Ok(());
    };
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open output file {}", path.display()))?;
    writeln!(f, "state={}", state.token())?;
    writeln!(f, "has_changes={}", state.has_changes())?;
    writeln!(f, "is_breaking={}", state.is_breaking())?;
    writeln!(f, "pr_comment_file={}", comment_file.display())?;
    Ok(())
}
