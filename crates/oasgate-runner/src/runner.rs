use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use oasgate_core::{resolve_state, ClassificationState, ReportFormat};
use oasgate_report::restructure;
use oasgate_sinks::{append_job_summary, comment_body, persist_report, write_output_vars};
use oasgate_tools::{CliDiffTool, CliFlattener, DiffRequest, DiffTool, Flattener};

use crate::{doctor::doctor, Config, RunContext};

/// Platform sinks resolved by the caller, typically from
/// GITHUB_STEP_SUMMARY and GITHUB_OUTPUT. Absent sinks are no-ops.
#[derive(Clone, Debug, Default)]
pub struct CiSinks {
    pub summary_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub state: ClassificationState,
    pub comment_file: PathBuf,
}

pub struct Runner {
    pub cfg: Config,
    flattener: Box<dyn Flattener>,
    diff: Box<dyn DiffTool>,
}

impl Runner {
    pub fn from_config(cfg: Config) -> Self {
        let flattener = Box::new(CliFlattener::new(cfg.tools.flatten_bin.clone()));
        let diff = Box::new(CliDiffTool::new(cfg.tools.diff_bin.clone()));
        Self { cfg, flattener, diff }
    }

    /// Run the full pipeline: flatten, diff, resolve, restructure, clip,
    /// fan out to the sinks. Errors only on invocation faults, sink I/O
    /// faults, or a met fail policy; oversized or missing reports degrade
    /// gracefully.
    pub fn run(&self, sinks: &CiSinks) -> Result<RunOutcome> {
        doctor(&self.cfg)?;
        let ctx = RunContext::create()?;

        let (old_doc, new_doc) = if self.cfg.flatten {
            tracing::info!(old = %self.cfg.old_doc, new = %self.cfg.new_doc, "flattening documents");
            let old = self.flattener.flatten(
                &self.cfg.old_doc,
                &ctx.work_file("old.flat.yaml"),
                &self.cfg.headers,
            )?;
            let new = self.flattener.flatten(
                &self.cfg.new_doc,
                &ctx.work_file("new.flat.yaml"),
                &self.cfg.headers,
            )?;
            (old, new)
        } else {
            (
                PathBuf::from(&self.cfg.old_doc),
                PathBuf::from(&self.cfg.new_doc),
            )
        };

        // markdown is always produced: the summary and comment sinks need
        // it even when the caller only persists other formats
        let requested = self.cfg.reports.requested();
        let mut formats: Vec<ReportFormat> = requested.iter().map(|(f, _)| *f).collect();
        if !formats.contains(&ReportFormat::Markdown) {
            formats.push(ReportFormat::Markdown);
        }
        let outputs: Vec<(ReportFormat, PathBuf)> = formats
            .iter()
            .map(|&f| (f, ctx.work_file(f.work_file())))
            .collect();

        let raw = self.diff.diff(&DiffRequest {
            old_doc,
            new_doc,
            outputs,
            fail_on_incompatible: self.cfg.fail_on_breaking,
            fail_on_changed: self.cfg.fail_on_changed,
            log_level: self.cfg.log_level.clone(),
        })?;
        let state = resolve_state(&raw);
        tracing::info!(state = state.token(), exit_code = raw.exit_code, "diff complete");

        // fold the markdown report into collapsible sections before any
        // sink sees it; the tool skips formats with no changes, which is
        // not an error
        let md_work = ctx.work_file(ReportFormat::Markdown.work_file());
        let markdown = match std::fs::read_to_string(&md_work) {
            Ok(s) if !s.is_empty() => {
                let folded = restructure(&s);
                std::fs::write(&md_work, &folded)
                    .with_context(|| format!("write {}", md_work.display()))?;
                Some(folded)
            }
            _ => None,
        };

        for (format, dest) in &requested {
            persist_report(*format, &ctx.work_file(format.work_file()), dest)?;
        }

        if let Some(md) = &markdown {
            append_job_summary(sinks.summary_path.as_deref(), md)?;
        }

        let comment_file = self.cfg.comment_path();
        if let Some(parent) = comment_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        std::fs::write(&comment_file, comment_body(state, markdown.as_deref()))
            .with_context(|| format!("write comment body {}", comment_file.display()))?;
        let comment_file = comment_file
            .canonicalize()
            .unwrap_or(comment_file);

        write_output_vars(sinks.output_path.as_deref(), state, &comment_file)?;

        if self.cfg.fail_on_breaking && state.is_breaking() {
            return Err(anyhow!(
                "incompatible (breaking) API changes detected and fail_on_breaking is set"
            ));
        }
        if self.cfg.fail_on_changed && state.has_changes() {
            return Err(anyhow!(
                "API changes detected and fail_on_changed is set"
            ));
        }

        Ok(RunOutcome { state, comment_file })
    }
}
