use serde::{Deserialize, Serialize};

/// Outcome of comparing two API descriptions, derived once per run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassificationState {
    NoChanges,
    Compatible,
    Incompatible,
}

impl ClassificationState {
    pub fn has_changes(self) -> bool {
        self != ClassificationState::NoChanges
    }

    pub fn is_breaking(self) -> bool {
        self == ClassificationState::Incompatible
    }

    /// Wire token, as printed by the diff tool and exported as an output variable.
    pub fn token(self) -> &'static str {
        match self {
            ClassificationState::NoChanges => "no_changes",
            ClassificationState::Compatible => "compatible",
            ClassificationState::Incompatible => "incompatible",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "no_changes" => Some(ClassificationState::NoChanges),
            "compatible" => Some(ClassificationState::Compatible),
            "incompatible" => Some(ClassificationState::Incompatible),
            _ => None,
        }
    }

    /// Human-readable status line used in every sink.
    pub fn status_line(self) -> &'static str {
        match self {
            ClassificationState::NoChanges => "No Changes",
            ClassificationState::Compatible => "Compatible Changes",
            ClassificationState::Incompatible => "Incompatible (Breaking) Changes",
        }
    }
}

/// Captured stdout+stderr and exit code of one diff tool invocation.
#[derive(Clone, Debug)]
pub struct RawToolOutput {
    pub text: String,
    pub exit_code: i32,
}

/// Normalize the diff tool's exit signals into one classification state.
///
/// Trust hierarchy, highest first:
/// 1. The last output line that exactly matches a canonical state token.
///    The tool prints the authoritative state as its final line, and its
///    exit code also encodes fail-on-breaking policy, so the token must
///    be tried before any exit-code inference.
/// 2. Exit code 0 plus a case-insensitive "no changes" phrase -> NoChanges,
///    otherwise Compatible.
/// 3. Non-zero exit -> Incompatible.
pub fn resolve_state(raw: &RawToolOutput) -> ClassificationState {
    let token = raw
        .text
        .lines()
        .filter_map(|l| ClassificationState::from_token(l.trim()))
        .last();
    if let Some(state) = token {
        return state;
    }

    tracing::warn!(
        exit_code = raw.exit_code,
        "no state token in diff output; falling back to exit-code heuristic"
    );
    if raw.exit_code == 0 {
        if raw.text.to_lowercase().contains("no changes") {
            ClassificationState::NoChanges
        } else {
            ClassificationState::Compatible
        }
    } else {
        ClassificationState::Incompatible
    }
}
