//! Complexity thresholds, severity classification, and debt estimation.
//!
//! The thresholds record is process-wide read-only state: initialized once
//! with the defaults below and shared by every analyzer without
//! synchronization.

use serde::{Deserialize, Serialize};

use crate::core::metrics::Severity;

/// Numeric cutoffs for severity classification and debt estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Cyclomatic complexity above which a function is flagged high.
    pub cyclomatic_high: u32,
    /// Cyclomatic complexity above which a function is critical.
    pub cyclomatic_critical: u32,
    /// Cognitive complexity above which a function is flagged high.
    pub cognitive_high: u32,
    /// Cognitive complexity above which a function is critical.
    pub cognitive_critical: u32,
    /// Nesting depth that triggers a warning.
    pub nesting_warning: u32,
    /// Nesting depth considered critical.
    pub nesting_critical: u32,
    /// Parameter count that triggers a warning.
    pub parameter_warning: u32,
    /// Parameter count considered critical.
    pub parameter_critical: u32,
    /// Function length (lines) that triggers a warning.
    pub loc_warning: u32,
    /// Function length (lines) considered critical.
    pub loc_critical: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cyclomatic_high: 10,
            cyclomatic_critical: 20,
            cognitive_high: 15,
            cognitive_critical: 25,
            nesting_warning: 4,
            nesting_critical: 6,
            parameter_warning: 5,
            parameter_critical: 7,
            loc_warning: 150,
            loc_critical: 300,
        }
    }
}

/// Classify severity with the monotone cascade (first match wins).
///
/// Parameter count is reported on metrics but is not an independent
/// severity driver; it only feeds refactoring suggestions.
pub fn classify_severity(cyclomatic: u32, cognitive: u32, nesting: u32) -> Severity {
    if cyclomatic > 20 || cognitive > 25 || nesting > 5 {
        Severity::Critical
    } else if cyclomatic > 15 || cognitive > 20 || nesting > 4 {
        Severity::High
    } else if cyclomatic > 10 || cognitive > 15 || nesting > 3 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Estimate refactoring effort in minutes for one function.
///
/// Floor of 5 minutes plus monotone add-ons for cyclomatic complexity,
/// cognitive complexity, and function length, plus a per-language review
/// tax. The result is non-decreasing in each input.
pub fn estimate_debt_minutes(cyclomatic: u32, cognitive: u32, loc: u32, language_tax: u32) -> u32 {
    let base = 5;
    let complexity_minutes = cyclomatic.saturating_sub(10) * 2;
    let cognitive_minutes = cognitive.saturating_sub(15);
    let loc_minutes = loc.saturating_sub(30) / 5;

    base + complexity_minutes + cognitive_minutes + loc_minutes + language_tax
}
