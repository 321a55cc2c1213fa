use std::path::Path;

use anyhow::{Context, Result};
use oasgate_core::ReportFormat;

/// Copy one produced report byte-for-byte to its caller-specified path.
///
/// Returns false without error when the tool skipped the format or left
/// an empty file; persisted copies are never truncated.
pub fn persist_report(format: ReportFormat, source: &Path, dest: &Path) -> Result<bool> {
    let produced = match std::fs::metadata(source) {
        Ok(meta) => meta.len() > 0,
        Err(_) => false,
    };
    if !produced {
        tracing::debug!(format = format.name(), "no report produced; skipping sink");
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::copy(source, dest)
        .with_context(|| format!("copy {} report to {}", format.name(), dest.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_full_report_without_truncation() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("report.md");
        let body = "x".repeat(2_000_000);
        std::fs::write(&src, &body).unwrap();

        let dest = dir.path().join("out/changes/report.md");
        assert!(persist_report(ReportFormat::Markdown, &src, &dest).unwrap());
        assert_eq!(std::fs::metadata(&dest).unwrap().len(), 2_000_000);
    }

    #[test]
    fn missing_source_is_skipped_silently() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("report.json");
        let dest = dir.path().join("report-out.json");
        assert!(!persist_report(ReportFormat::Json, &src, &dest).unwrap());
        assert!(!dest.exists());
    }

    #[test]
    fn empty_source_is_skipped_silently() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("report.txt");
        std::fs::write(&src, "").unwrap();
        let dest = dir.path().join("report-out.txt");
        assert!(!persist_report(ReportFormat::Text, &src, &dest).unwrap());
    }
}
