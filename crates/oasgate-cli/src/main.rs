use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oasgate_core::ReportFormat;
use oasgate_runner::{doctor, CiSinks, Config, Runner};

#[derive(Parser)]
#[command(name = "oasgate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two API descriptions and fan the diff report out to the CI sinks
    Run(RunArgs),

    /// Check that the configured external tools are available
    Doctor {
        /// Optional oasgate.toml to take tool locations from
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Optional oasgate.toml; flags override file values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Old document, local path or URL
    #[arg(long)]
    old_doc: Option<String>,

    /// New document, local path or URL
    #[arg(long)]
    new_doc: Option<String>,

    /// `Name: value` header for authenticated remote fetches; repeatable
    #[arg(long = "header")]
    headers: Vec<String>,

    /// Skip the flattening pass
    #[arg(long)]
    no_flatten: bool,

    /// Fail the run when breaking changes are detected
    #[arg(long)]
    fail_on_breaking: bool,

    /// Fail the run when any change is detected
    #[arg(long)]
    fail_on_changed: bool,

    /// Log level forwarded to the diff tool
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    html_path: Option<String>,
    #[arg(long)]
    markdown_path: Option<String>,
    #[arg(long)]
    json_path: Option<String>,
    #[arg(long)]
    asciidoc_path: Option<String>,
    #[arg(long)]
    text_path: Option<String>,

    /// Where to write the review-comment body
    #[arg(long)]
    comment_file: Option<String>,

    #[arg(long)]
    flatten_bin: Option<String>,
    #[arg(long)]
    diff_bin: Option<String>,
}

impl RunArgs {
    fn into_config(self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => {
                let old = self
                    .old_doc
                    .clone()
                    .ok_or_else(|| anyhow!("--old-doc is required without --config"))?;
                let new = self
                    .new_doc
                    .clone()
                    .ok_or_else(|| anyhow!("--new-doc is required without --config"))?;
                Config::new(old, new)
            }
        };

        if let Some(old) = self.old_doc {
            cfg.old_doc = old;
        }
        if let Some(new) = self.new_doc {
            cfg.new_doc = new;
        }
        if !self.headers.is_empty() {
            cfg.headers = self.headers;
        }
        if self.no_flatten {
            cfg.flatten = false;
        }
        cfg.fail_on_breaking |= self.fail_on_breaking;
        cfg.fail_on_changed |= self.fail_on_changed;
        if let Some(level) = self.log_level {
            cfg.log_level = Some(level);
        }
        for (format, path) in [
            (ReportFormat::Html, self.html_path),
            (ReportFormat::Markdown, self.markdown_path),
            (ReportFormat::Json, self.json_path),
            (ReportFormat::Asciidoc, self.asciidoc_path),
            (ReportFormat::Text, self.text_path),
        ] {
            if let Some(path) = path {
                cfg.reports.set(format, path);
            }
        }
        if let Some(file) = self.comment_file {
            cfg.comment_file = file;
        }
        if let Some(bin) = self.flatten_bin {
            cfg.tools.flatten_bin = bin;
        }
        if let Some(bin) = self.diff_bin {
            cfg.tools.diff_bin = bin;
        }
        Ok(cfg)
    }
}

fn ci_sinks_from_env() -> CiSinks {
    CiSinks {
        summary_path: std::env::var_os("GITHUB_STEP_SUMMARY").map(PathBuf::from),
        output_path: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => {
            let cfg = args.into_config()?;
            let sinks = ci_sinks_from_env();
            let outcome = Runner::from_config(cfg).run(&sinks)?;
            println!("state: {}", outcome.state.token());
            println!("comment body: {}", outcome.comment_file.display());
        }
        Command::Doctor { config } => {
            let cfg = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::new("", ""),
            };
            doctor(&cfg)?;
            println!("OK");
        }
    }
    Ok(())
}
