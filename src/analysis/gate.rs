//! Quality gate: compare the issue list against a severity threshold and
//! decide the exit status.

use crate::core::metrics::TechnicalDebtIssue;

/// Gate threshold accepted by `--fail-on`.
///
/// `Info` occupies rank 0, so it fails on any issue even though no
/// analyzer emits info-severity findings. `None` always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailThreshold {
    /// Fail on any issue.
    Info,
    /// Fail on low severity and above.
    Low,
    /// Fail on medium severity and above.
    Medium,
    /// Fail on high severity and above (the default).
    High,
    /// Fail only on critical issues.
    Critical,
    /// Never fail.
    None,
}

impl FailThreshold {
    /// Parse a threshold string. Unknown values default to `High`
    /// (rank 3) rather than erroring out.
    pub fn parse_lossy(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "info" => Self::Info,
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            "none" => Self::None,
            _ => Self::High,
        }
    }

    /// Severity rank this threshold compares against.
    fn rank(self) -> Option<u8> {
        match self {
            Self::Info => Some(0),
            Self::Low => Some(1),
            Self::Medium => Some(2),
            Self::High => Some(3),
            Self::Critical => Some(4),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for FailThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Whether the gate fails: true iff any issue has severity rank at or
/// above the threshold rank.
pub fn should_fail(issues: &[TechnicalDebtIssue], threshold: FailThreshold) -> bool {
    let Some(threshold_rank) = threshold.rank() else {
        return false;
    };

    issues
        .iter()
        .any(|issue| issue.severity.rank() >= threshold_rank)
}
