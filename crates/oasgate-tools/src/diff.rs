use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use oasgate_core::{RawToolOutput, ReportFormat};

/// One diff invocation: the documents to compare, where each requested
/// report format should land, and the tool's policy flags.
#[derive(Clone, Debug)]
pub struct DiffRequest {
    pub old_doc: PathBuf,
    pub new_doc: PathBuf,
    pub outputs: Vec<(ReportFormat, PathBuf)>,
    pub fail_on_incompatible: bool,
    pub fail_on_changed: bool,
    pub log_level: Option<String>,
}

/// Computes the diff between two flattened documents.
///
/// A non-zero exit is not an error here: the tool exits non-zero both for
/// real faults and for fail-on-breaking policy hits, so the captured
/// output and code go to the state resolver as-is. Only a failure to
/// spawn the binary is an error.
pub trait DiffTool: Send + Sync {
    fn diff(&self, req: &DiffRequest) -> Result<RawToolOutput>;
}

#[derive(Clone, Debug)]
pub struct CliDiffTool {
    pub bin: String,
}

impl CliDiffTool {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn format_flag(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Html => "--html",
            ReportFormat::Markdown => "--markdown",
            ReportFormat::Json => "--json",
            ReportFormat::Asciidoc => "--asciidoc",
            ReportFormat::Text => "--text",
        }
    }
}

impl Default for CliDiffTool {
    fn default() -> Self {
        Self::new("openapi-diff")
    }
}

impl DiffTool for CliDiffTool {
    fn diff(&self, req: &DiffRequest) -> Result<RawToolOutput> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg(&req.old_doc).arg(&req.new_doc);
        for (format, path) in &req.outputs {
            cmd.arg(Self::format_flag(*format)).arg(path);
        }
        if req.fail_on_incompatible {
            cmd.arg("--fail-on-incompatible");
        }
        if req.fail_on_changed {
            cmd.arg("--fail-on-changed");
        }
        if let Some(level) = &req.log_level {
            cmd.arg("--log").arg(level);
        }
        // the tool prints the authoritative state token as its final line
        cmd.arg("--state");

        let output = cmd
            .output()
            .with_context(|| format!("spawn diff tool `{}`", self.bin))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }
        Ok(RawToolOutput {
            text,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

/// Best-effort probe used by the doctor preflight.
pub fn probe_binary(bin: &str) -> Result<()> {
    let out = Command::new(bin)
        .arg("--version")
        .output()
        .with_context(|| format!("`{}` not found on PATH", bin))?;
    // some tools print version info on stderr or exit non-zero for --version;
    // being spawnable is the signal that matters
    let _ = out;
    Ok(())
}
