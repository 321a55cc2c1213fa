use oasgate_core::ClassificationState;
use oasgate_report::{clip, SINK_BUDGET_BYTES};

/// Fixed token the downstream comment step greps for to update a prior
/// run's comment in place instead of posting a duplicate.
pub const COMMENT_MARKER: &str = "<!-- oasgate-openapi-diff -->";

const COMMENT_SUMMARY_LABEL: &str = "View the full API changelog";

/// Build the review-comment body: marker, status line, and the clipped
/// report inside one outer collapsible block. With no markdown report a
/// minimal no-changes body is synthesized instead.
pub fn comment_body(state: ClassificationState, markdown: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(COMMENT_MARKER.as_bytes());
    body.extend_from_slice(b"\n## OpenAPI Diff: ");
    body.extend_from_slice(state.status_line().as_bytes());
    body.extend_from_slice(b"\n\n");

    match markdown {
        Some(report) => {
            body.extend_from_slice(
                format!("<details>\n<summary>{}</summary>\n\n", COMMENT_SUMMARY_LABEL).as_bytes(),
            );
            body.extend_from_slice(&clip(report, SINK_BUDGET_BYTES));
            body.extend_from_slice(b"\n\n</details>\n");
        }
        None => body.extend_from_slice(b"No changes detected.\n"),
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasgate_report::truncation_warning;

    #[test]
    fn body_carries_marker_and_status_line() {
        let body = comment_body(ClassificationState::Compatible, Some("## changed"));
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with(COMMENT_MARKER));
        assert!(text.contains("Compatible Changes"));
        assert!(text.contains("## changed"));
        assert!(text.contains("<details>"));
    }

    #[test]
    fn breaking_state_gets_breaking_status_line() {
        let body = comment_body(ClassificationState::Incompatible, Some("r"));
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("Incompatible (Breaking) Changes"));
    }

    #[test]
    fn missing_report_synthesizes_no_changes_body() {
        let body = comment_body(ClassificationState::NoChanges, None);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("No changes detected."));
        assert!(text.contains("No Changes"));
        assert!(!text.contains("<details>"));
    }

    #[test]
    fn oversized_report_is_clipped_inside_the_envelope() {
        let report = "r".repeat(SINK_BUDGET_BYTES + 100_000);
        let body = comment_body(ClassificationState::Compatible, Some(&report));
        let overhead = comment_body(ClassificationState::Compatible, Some("")).len()
            + truncation_warning(report.len(), SINK_BUDGET_BYTES).len();
        assert!(body.len() <= SINK_BUDGET_BYTES + overhead);
    }
}
