use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Scoped working directory for one run. The flattened documents and the
/// diff tool's raw report files land here; the directory is removed on
/// every exit path when the context is dropped.
pub struct RunContext {
    dir: TempDir,
}

impl RunContext {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("oasgate-")
            .tempdir()
            .context("create run workspace")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn work_file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_is_removed_on_drop() {
        let ctx = RunContext::create().unwrap();
        let path = ctx.path().to_path_buf();
        std::fs::write(ctx.work_file("report.md"), "x").unwrap();
        assert!(path.exists());
        drop(ctx);
        assert!(!path.exists());
    }
}
