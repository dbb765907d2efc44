//! Fill run metrics.
//!
//! This module defines the small set of structs used to observe what a fill
//! pass did.
//!
//! The intended usage is:
//!
//! - [`crate::fill_fields`] for normal operation (count only).
//! - [`crate::fill_fields_verbose`] for debugging and the CLI report.
//!
//! Metrics are intentionally simple and *opt-in*: the counting path does
//! not allocate per-element assignment traces.

use std::time::Duration;

use crate::SemanticField;

/// Counters and timing for one fill pass.
#[derive(Debug, Default, Clone)]
pub struct FillMetrics {
    /// Total elapsed time for the pass.
    pub total: Duration,
    /// Frames whose documents were reachable and scanned.
    pub frames_scanned: usize,
    /// Frames skipped because access was denied.
    pub frames_denied: usize,
    /// Candidate inputs after the type filter, across all documents.
    pub candidates: usize,
    /// Candidates that passed the eligibility gate.
    pub eligible: usize,
    /// Eligible elements claimed by some field.
    pub matched: usize,
    /// Elements actually written (claimed, with a usable profile value).
    pub filled: usize,
    /// Contained per-element failures.
    pub errors: usize,
}

/// What happened to one claimed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// Value written and notifications fired.
    Filled(String),
    /// Claimed, but the profile holds no usable value; left untouched.
    NoValue,
    /// Write or dispatch failed; contained, scan continued.
    Failed(String),
}

/// One claimed element in a verbose run.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub field: SemanticField,
    /// Compact element descriptor, e.g. `input#email[type=email]`.
    pub element: String,
    pub outcome: FillOutcome,
}

/// Result of a verbose fill pass.
#[derive(Debug, Default, Clone)]
pub struct FillReport {
    /// Number of elements written; the same count the plain path returns.
    pub filled: usize,
    /// Per-claim trace (empty on the counting path).
    pub assignments: Vec<Assignment>,
    pub metrics: FillMetrics,
}
