use anyhow::{Context, Result};

use crate::Config;
use oasgate_tools::probe_binary;

/// Preflight: the configured external tools must be spawnable before the
/// pipeline starts, so a missing binary fails with an actionable message
/// instead of mid-run.
pub fn doctor(cfg: &Config) -> Result<()> {
    if cfg.flatten {
        probe_binary(&cfg.tools.flatten_bin).with_context(|| {
            format!(
                "flattener `{}` unavailable; install it or disable flattening",
                cfg.tools.flatten_bin
            )
        })?;
    }
    probe_binary(&cfg.tools.diff_bin)
        .with_context(|| format!("diff tool `{}` unavailable", cfg.tools.diff_bin))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_diff_tool_fails_preflight() {
        let mut cfg = Config::new("a", "b");
        cfg.flatten = false;
        cfg.tools.diff_bin = "/nonexistent/oasgate-no-such-diff".to_string();
        assert!(doctor(&cfg).is_err());
    }
}
