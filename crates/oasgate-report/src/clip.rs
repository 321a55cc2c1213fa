//! Byte-budget enforcement for size-limited CI sinks.

/// Ceiling applied to the job-summary and comment-body sinks. Persisted
/// report files are never clipped.
pub const SINK_BUDGET_BYTES: usize = 950_000;

/// Clip `text` to at most `ceiling` bytes plus a trailing warning.
///
/// Short input passes through unchanged. Oversized input keeps its first
/// `ceiling` bytes verbatim; the cut is byte-exact and may split a
/// multi-byte character, which the consuming sinks tolerate. The warning
/// names the original size and points at the untruncated artifact, and is
/// not counted against the ceiling.
pub fn clip(text: &str, ceiling: usize) -> Vec<u8> {
    if text.len() <= ceiling {
        return text.as_bytes().to_vec();
    }
    let mut out = text.as_bytes()[..ceiling].to_vec();
    out.extend_from_slice(truncation_warning(text.len(), ceiling).as_bytes());
    out
}

/// Warning appended after the clipped prefix, including its leading blank line.
pub fn truncation_warning(original: usize, ceiling: usize) -> String {
    format!(
        "\n\n---\n\n:warning: **Report truncated**: the full report is {} bytes, \
         over the {} byte limit for this view. \
         Download the full report from the workflow artifacts.\n",
        original, ceiling
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        let text = "a short report";
        assert_eq!(clip(text, 1000), text.as_bytes());
    }

    #[test]
    fn input_exactly_at_ceiling_is_untouched() {
        let text = "x".repeat(100);
        assert_eq!(clip(&text, 100), text.as_bytes());
    }

    #[test]
    fn oversized_input_keeps_exact_prefix() {
        let text = "abcdefghij".repeat(20);
        let out = clip(&text, 55);
        assert_eq!(&out[..55], &text.as_bytes()[..55]);
    }

    #[test]
    fn output_is_bounded_by_ceiling_plus_warning() {
        let text = "y".repeat(3000);
        let ceiling = 1024;
        let out = clip(&text, ceiling);
        assert!(out.len() <= ceiling + truncation_warning(text.len(), ceiling).len());
    }

    #[test]
    fn warning_names_both_sizes() {
        let text = "z".repeat(200);
        let out = String::from_utf8(clip(&text, 50)).unwrap();
        assert!(out.contains("200 bytes"));
        assert!(out.contains("50 byte limit"));
    }

    #[test]
    fn cut_may_land_inside_a_multibyte_character() {
        // 'é' is two bytes; clipping at 2 keeps only its first byte
        let text = "aé";
        let out = clip(text, 2);
        assert_eq!(&out[..2], &text.as_bytes()[..2]);
    }
}
