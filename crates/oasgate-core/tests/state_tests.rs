use oasgate_core::{resolve_state, ClassificationState, RawToolOutput, ReportFormat};

fn raw(text: &str, exit_code: i32) -> RawToolOutput {
    RawToolOutput {
        text: text.to_string(),
        exit_code,
    }
}

#[test]
fn explicit_token_wins_over_conflicting_exit_code() {
    let out = raw("comparing documents\ncompatible", 1);
    assert_eq!(resolve_state(&out), ClassificationState::Compatible);
}

#[test]
fn last_token_line_is_authoritative() {
    let out = raw("no_changes\nsome log noise\nincompatible", 0);
    assert_eq!(resolve_state(&out), ClassificationState::Incompatible);
}

#[test]
fn token_lines_are_matched_exactly_not_as_substrings() {
    // "backward incompatible changes" must not match the token
    let out = raw("found backward incompatible changes in 2 endpoints", 0);
    assert_eq!(resolve_state(&out), ClassificationState::Compatible);
}

#[test]
fn empty_output_and_zero_exit_defaults_to_compatible() {
    assert_eq!(resolve_state(&raw("", 0)), ClassificationState::Compatible);
}

#[test]
fn no_changes_phrase_with_zero_exit_resolves_no_changes() {
    let out = raw("No changes detected.", 0);
    assert_eq!(resolve_state(&out), ClassificationState::NoChanges);
}

#[test]
fn no_changes_phrase_matches_case_insensitively() {
    let out = raw("NO CHANGES between the two documents", 0);
    assert_eq!(resolve_state(&out), ClassificationState::NoChanges);
}

#[test]
fn nonzero_exit_without_token_resolves_incompatible() {
    let out = raw("stack trace: something broke", 3);
    assert_eq!(resolve_state(&out), ClassificationState::Incompatible);
}

#[test]
fn token_line_may_carry_surrounding_whitespace() {
    let out = raw("  incompatible  \n", 0);
    assert_eq!(resolve_state(&out), ClassificationState::Incompatible);
}

#[test]
fn state_tokens_round_trip() {
    for state in [
        ClassificationState::NoChanges,
        ClassificationState::Compatible,
        ClassificationState::Incompatible,
    ] {
        assert_eq!(ClassificationState::from_token(state.token()), Some(state));
    }
}

#[test]
fn derived_flags_follow_the_state() {
    assert!(!ClassificationState::NoChanges.has_changes());
    assert!(ClassificationState::Compatible.has_changes());
    assert!(!ClassificationState::Compatible.is_breaking());
    assert!(ClassificationState::Incompatible.is_breaking());
}

#[test]
fn format_names_parse_back() {
    for f in ReportFormat::ALL {
        assert_eq!(f.name().parse::<ReportFormat>().unwrap(), f);
    }
}
