use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use oasgate_core::ReportFormat;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Old document, local path or URL.
    pub old_doc: String,
    /// New document, local path or URL.
    pub new_doc: String,
    /// `Name: value` headers forwarded to the flattener for remote fetches.
    #[serde(default)]
    pub headers: Vec<String>,
    /// Flatten both documents before diffing. Needed for specs with
    /// circular self-references.
    #[serde(default = "default_true")]
    pub flatten: bool,
    #[serde(default)]
    pub fail_on_breaking: bool,
    #[serde(default)]
    pub fail_on_changed: bool,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub reports: ReportPathsConfig,
    /// Where the synthesized review-comment body is written. Must survive
    /// the run, so it lives outside the scoped workspace.
    #[serde(default = "default_comment_file")]
    pub comment_file: String,
    #[serde(default)]
    pub tools: ToolsConfig,
}

fn default_true() -> bool {
    true
}

fn default_comment_file() -> String {
    "oasgate-pr-comment.md".to_string()
}

/// Caller-specified destination per report format. Unset formats are not
/// requested from the diff tool.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportPathsConfig {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub asciidoc: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ReportPathsConfig {
    pub fn get(&self, format: ReportFormat) -> Option<&str> {
        match format {
            ReportFormat::Html => self.html.as_deref(),
            ReportFormat::Markdown => self.markdown.as_deref(),
            ReportFormat::Json => self.json.as_deref(),
            ReportFormat::Asciidoc => self.asciidoc.as_deref(),
            ReportFormat::Text => self.text.as_deref(),
        }
    }

    pub fn set(&mut self, format: ReportFormat, path: String) {
        let slot = match format {
            ReportFormat::Html => &mut self.html,
            ReportFormat::Markdown => &mut self.markdown,
            ReportFormat::Json => &mut self.json,
            ReportFormat::Asciidoc => &mut self.asciidoc,
            ReportFormat::Text => &mut self.text,
        };
        *slot = Some(path);
    }

    /// Requested formats with their tilde-expanded destinations.
    pub fn requested(&self) -> Vec<(ReportFormat, PathBuf)> {
        ReportFormat::ALL
            .iter()
            .filter_map(|&f| {
                self.get(f)
                    .map(|p| (f, PathBuf::from(shellexpand::tilde(p).to_string())))
            })
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub flatten_bin: String,
    pub diff_bin: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            flatten_bin: "openapi-flattener".to_string(),
            diff_bin: "openapi-diff".to_string(),
        }
    }
}

impl Config {
    pub fn new(old_doc: impl Into<String>, new_doc: impl Into<String>) -> Self {
        Self {
            old_doc: old_doc.into(),
            new_doc: new_doc.into(),
            headers: vec![],
            flatten: true,
            fail_on_breaking: false,
            fail_on_changed: false,
            log_level: None,
            reports: ReportPathsConfig::default(),
            comment_file: default_comment_file(),
            tools: ToolsConfig::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse oasgate.toml")?;
        Ok(cfg)
    }

    pub fn comment_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.comment_file).to_string())
    }
}
