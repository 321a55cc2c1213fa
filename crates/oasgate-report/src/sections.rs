//! Rewrites the diff tool's flat markdown report into collapsible sections.
//!
//! Endpoint headings (markdown ATX headings) stay top-level; the verbose
//! `Request:` / `Return Type:` detail blocks under them are folded into
//! `<details>` wrappers so a long changelog stays scannable.

const BLOCK_CLOSE: &str = "</details>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    /// ATX heading line; starts a new top-level unit.
    Endpoint,
    /// `Request:` / `Return Type:` line; opens a collapsible block.
    Detail(DetailKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailKind {
    Request,
    ReturnType,
}

impl DetailKind {
    fn label(self) -> &'static str {
        match self {
            DetailKind::Request => "Request",
            DetailKind::ReturnType => "Return Type",
        }
    }
}

fn classify(line: &str) -> Option<Heading> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Some(Heading::Endpoint);
    }
    let trimmed = line.trim();
    if trimmed.starts_with("Request:") {
        return Some(Heading::Detail(DetailKind::Request));
    }
    if trimmed.starts_with("Return Type:") {
        return Some(Heading::Detail(DetailKind::ReturnType));
    }
    None
}

/// Fold detail sections of a markdown report into collapsible blocks.
///
/// Total for any input: at most one block is open at a time, every opened
/// block is closed by the next heading or at end of input, and non-heading
/// lines pass through unchanged in their original order.
pub fn restructure_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    let mut open = false;

    for line in lines {
        match classify(line) {
            Some(Heading::Detail(kind)) => {
                if open {
                    out.push(BLOCK_CLOSE.to_string());
                    out.push(String::new());
                }
                out.push("<details>".to_string());
                out.push(format!("<summary>{}</summary>", kind.label()));
                out.push(String::new());
                out.push(line.to_string());
                out.push(String::new());
                open = true;
            }
            Some(Heading::Endpoint) => {
                if open {
                    out.push(BLOCK_CLOSE.to_string());
                    out.push(String::new());
                    open = false;
                }
                out.push(line.to_string());
            }
            None => out.push(line.to_string()),
        }
    }

    if open {
        out.push(BLOCK_CLOSE.to_string());
    }
    out
}

pub fn restructure(report: &str) -> String {
    let mut doc = restructure_lines(report.lines()).join("\n");
    if report.ends_with('\n') {
        doc.push('\n');
    }
    doc
}
