use serde::{Deserialize, Serialize};

/// Reporter behavior knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Exit non-zero when any block is predicted fault-prone. Off by default:
    /// CI treats predicted risk as advisory, not a build failure.
    pub fail_on_risk: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            fail_on_risk: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_does_not_fail_on_risk() {
        assert!(!ReporterConfig::default().fail_on_risk);
    }
}
