use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};

/// Rewrites a spec document to eliminate circular self-references before
/// it is fed to the diff tool. Sources may be local paths or URLs; headers
/// are forwarded for authenticated remote fetches.
pub trait Flattener: Send + Sync {
    fn flatten(&self, source: &str, out: &Path, headers: &[String]) -> Result<PathBuf>;
}

#[derive(Clone, Debug)]
pub struct CliFlattener {
    pub bin: String,
}

impl CliFlattener {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for CliFlattener {
    fn default() -> Self {
        Self::new("openapi-flattener")
    }
}

impl Flattener for CliFlattener {
    fn flatten(&self, source: &str, out: &Path, headers: &[String]) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg(source).arg("-o").arg(out);
        for h in headers {
            cmd.arg("--header").arg(h);
        }
        let output = cmd
            .output()
            .with_context(|| format!("spawn flattener `{}`", self.bin))?;
        if !output.status.success() {
            return Err(anyhow!(
                "flattening {} failed\nstdout:{}\nstderr:{}",
                source,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(out.to_path_buf())
    }
}
