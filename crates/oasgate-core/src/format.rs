use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report formats the diff tool can emit. Only Markdown is restructured
/// downstream; the rest are copied through verbatim.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Markdown,
    Json,
    Asciidoc,
    Text,
}

#[derive(Debug, Error)]
#[error("unknown report format: {0}")]
pub struct UnknownFormat(pub String);

impl ReportFormat {
    pub const ALL: [ReportFormat; 5] = [
        ReportFormat::Html,
        ReportFormat::Markdown,
        ReportFormat::Json,
        ReportFormat::Asciidoc,
        ReportFormat::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Asciidoc => "asciidoc",
            ReportFormat::Text => "text",
        }
    }

    /// File name the diff tool writes this format to inside the run workspace.
    pub fn work_file(self) -> &'static str {
        match self {
            ReportFormat::Html => "report.html",
            ReportFormat::Markdown => "report.md",
            ReportFormat::Json => "report.json",
            ReportFormat::Asciidoc => "report.adoc",
            ReportFormat::Text => "report.txt",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(ReportFormat::Html),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "asciidoc" | "adoc" => Ok(ReportFormat::Asciidoc),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
