//! # Debtdrone: Function-Level Complexity Analysis
//!
//! A command-line static analyzer that scans a source repository, computes
//! per-function complexity metrics with grammar-driven parse trees, and
//! surfaces findings that exceed configurable thresholds. Twelve language
//! families are supported through a single analysis engine driven by
//! per-language descriptor tables:
//!
//! - **Metrics**: cyclomatic complexity, cognitive complexity, nesting
//!   depth, parameter count, lines of code
//! - **Severity**: deterministic cascade from metric values to
//!   low/medium/high/critical
//! - **Debt**: per-function refactoring-effort estimate in minutes
//! - **Quality gate**: pass/fail decision mapped to the process exit code
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CLI (bin/cli)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Orchestrator │ Repository │   Language   │  Report & Gate  │
//! │               │   Walker   │   Engine     │                 │
//! │ • Analyzer    │ • Pruning  │ • Registry   │ • Text / JSON   │
//! │   set         │ • Dispatch │ • Profiles   │ • Summary       │
//! │ • Error       │ • Context  │ • Metric     │ • Fail          │
//! │   absorption  │   tagging  │   walkers    │   threshold     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use debtdrone::analysis::orchestrator::Engine;
//! use debtdrone::core::metrics::RunContext;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = Engine::with_default_analyzers();
//!     let ctx = RunContext::new();
//!     let report = engine.run(&ctx, std::path::Path::new("."), |_| {})?;
//!     println!("{} issues found", report.issues.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

// Core data structures and cross-cutting concerns
pub mod core {
    //! Core records: errors, thresholds, metrics, run context.

    pub mod cancel;
    pub mod errors;
    pub mod metrics;
    pub mod thresholds;
}

// Language-specific parsing and the generic metrics engine
pub mod lang {
    //! Grammar registry, per-language descriptors, and the function
    //! metrics engine shared by every language family.

    pub mod ast;
    pub mod engine;
    pub mod profile;
    pub mod profiles;
    pub mod registry;
}

// Repository-level analysis pipeline
pub mod analysis {
    //! Repository walker, issue conversion, reporting, quality gate,
    //! and the analyzer orchestrator.

    pub mod gate;
    pub mod issues;
    pub mod loc;
    pub mod orchestrator;
    pub mod report;
    pub mod security;
    pub mod walker;
}

// Re-export the types most callers need
pub use crate::core::errors::{DebtdroneError, Result};
pub use crate::core::metrics::{ComplexityMetric, RunContext, Severity, TechnicalDebtIssue};
pub use crate::core::thresholds::Thresholds;
