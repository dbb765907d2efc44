//! Candidate discovery and the fill loop.
//!
//! This module is the operational core of the engine:
//!
//! - Enumerate candidate inputs from the main document and every reachable
//!   frame (best-effort; a denied frame is skipped, not fatal).
//! - Gate candidates on render/editability state.
//! - Classify each eligible element against the registry (first field in
//!   priority order with any matching rule claims the element).
//! - Resolve the profile value and write it, firing the synthetic change
//!   sequence.
//!
//! ## Key properties
//!
//! - Single pass, document order: main document first, then frames in
//!   document order.
//! - An element claims at most one field; a claimed element is never
//!   reconsidered within the pass, even when no value was available to
//!   write.
//! - Per-element failures are contained and logged; nothing observable
//!   escapes beyond the returned counts. Repeated passes are idempotent.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use super::events;
use super::metrics::{Assignment, FillMetrics, FillOutcome, FillReport};
use super::registry::Registry;
use super::signature::Signature;
use crate::dom::{describe, Attr, DocumentHandle, DomError, ElementHandle};
use crate::profile::Profile;

/// Input `type` values that are always inspected. Unknown types are still
/// admitted when the element's name hints at a known field; everything
/// else is skipped before matching.
const CANDIDATE_TYPES: &[&str] = &["text", "url", "tel", "email"];

/// Name fragments that admit an input regardless of its declared type.
const NAME_HINTS: &[&str] = &["first_name", "last_name", "phone", "email"];

/// Resolver orchestrates one fill pass over a document tree.
///
/// Usage: create with [`Resolver::new`] then call [`run`](Resolver::run)
/// or [`run_with_report`](Resolver::run_with_report).
pub(crate) struct Resolver<'a> {
    document: &'a dyn DocumentHandle,
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a dyn DocumentHandle, registry: &'a Registry) -> Self {
        Resolver { document, registry }
    }

    /// Run one pass and return the number of elements filled.
    pub fn run(&self, profile: &Profile) -> usize {
        self.execute(profile, false).filled
    }

    /// Run one pass and return the full per-claim trace.
    pub fn run_with_report(&self, profile: &Profile) -> FillReport {
        self.execute(profile, true)
    }

    fn execute(&self, profile: &Profile, collect: bool) -> FillReport {
        let start = Instant::now();
        let mut report = FillReport::default();

        let candidates = self.candidates(&mut report.metrics);
        report.metrics.candidates = candidates.len();

        for element in &candidates {
            self.visit(element.as_ref(), profile, collect, &mut report);
        }

        report.filled = report.metrics.filled;
        report.metrics.total = start.elapsed();
        info!(
            candidates = report.metrics.candidates,
            eligible = report.metrics.eligible,
            matched = report.metrics.matched,
            filled = report.metrics.filled,
            errors = report.metrics.errors,
            "fill pass complete"
        );
        report
    }

    /// Accumulate candidate inputs: main document first, then each frame in
    /// document order. A frame whose document is unreachable is skipped
    /// without failing the scan.
    fn candidates(&self, metrics: &mut FillMetrics) -> Vec<Box<dyn ElementHandle>> {
        let mut out: Vec<Box<dyn ElementHandle>> = Vec::new();
        collect_inputs(self.document, &mut out);

        for frame in self.document.frames() {
            match frame.document() {
                Ok(doc) => {
                    metrics.frames_scanned += 1;
                    collect_inputs(doc.as_ref(), &mut out);
                }
                Err(err) => {
                    metrics.frames_denied += 1;
                    warn!(frame = %frame.describe(), error = %err, "cannot access frame; skipping");
                }
            }
        }

        out
    }

    fn visit(
        &self,
        element: &dyn ElementHandle,
        profile: &Profile,
        collect: bool,
        report: &mut FillReport,
    ) {
        let state = element.state();
        if !state.is_eligible() {
            debug!(element = %describe(element), ?state, "skipping ineligible input");
            return;
        }
        report.metrics.eligible += 1;

        let signature = Signature::scan(element);
        trace!(element = %describe(element), signature = signature.text(), "scanned signature");
        let Some(field) = self.registry.classify(element, &signature) else {
            debug!(element = %describe(element), "no field matched");
            return;
        };
        report.metrics.matched += 1;

        // The claim stands even when there is nothing to write: no later
        // field is tried for this element in this pass.
        let outcome = match profile.value_for(field) {
            None => {
                debug!(field = %field, element = %describe(element), "no profile value; leaving untouched");
                FillOutcome::NoValue
            }
            Some(value) => match fill_element(element, &value) {
                Ok(()) => {
                    report.metrics.filled += 1;
                    debug!(field = %field, element = %describe(element), "filled");
                    FillOutcome::Filled(value)
                }
                Err(err) => {
                    report.metrics.errors += 1;
                    warn!(
                        field = %field,
                        element = %describe(element),
                        error = %err,
                        "fill failed; continuing scan"
                    );
                    FillOutcome::Failed(err.to_string())
                }
            },
        };

        if collect {
            report.assignments.push(Assignment {
                field,
                element: describe(element),
                outcome,
            });
        }
    }
}

fn collect_inputs(document: &dyn DocumentHandle, out: &mut Vec<Box<dyn ElementHandle>>) {
    out.extend(document.inputs().into_iter().filter(|el| is_candidate(el.as_ref())));
}

/// The conservative, inclusive type filter: text-like types and type-less
/// inputs pass; anything else passes only on a name hint.
fn is_candidate(element: &dyn ElementHandle) -> bool {
    match element.attr(Attr::Type) {
        None => true,
        Some(ty) => {
            let ty = ty.to_ascii_lowercase();
            CANDIDATE_TYPES.contains(&ty.as_str()) || has_name_hint(element)
        }
    }
}

fn has_name_hint(element: &dyn ElementHandle) -> bool {
    element.attr(Attr::Name).is_some_and(|name| {
        let name = name.to_ascii_lowercase();
        NAME_HINTS.iter().any(|hint| name.contains(hint))
    })
}

fn fill_element(element: &dyn ElementHandle, value: &str) -> Result<(), DomError> {
    element.set_value(value)?;
    events::notify_change(element)
}
