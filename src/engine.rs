//! Field classification and fill engine.
//!
//! This module is the *public entry point* for the autofill engine. It is
//! split into focused submodules under `src/engine/` while keeping stable
//! paths (for example `crate::engine::Resolver` and
//! `crate::engine::Registry`).
//!
//! ## How the parts work together
//!
//! At a high level, one fill pass over a document is a pipeline:
//!
//! ```text
//! rules::all() ──► Registry::global            (registry.rs)
//!                        │
//! document ── candidates ┼─ eligibility gate (rendered / enabled / writable)
//!   main doc + frames    │
//!                        ▼
//!              Signature::scan                 (signature.rs)
//!                - attributes + label text + raw markup
//!                - lower-cased composite
//!                        │
//!                        ▼
//!              Registry::classify
//!                - fields in fixed priority order
//!                - attr rules, then patterns; first match claims
//!                        │
//!                        ▼
//!              Resolver fill                   (resolver.rs)
//!                - profile value lookup (fullName synthesis)
//!                - set_value + notify_change   (events.rs)
//!                - per-element containment
//!                        │
//!                        ▼
//!                   FillReport                 (metrics.rs)
//! ```
//!
//! The engine is single-pass: candidates are visited once, in document
//! order, and processing is independent per element. There is no feedback
//! loop and no scoring; priority is purely the registry order.
//!
//! ## Responsibilities by module
//!
//! - `registry.rs`: compiles the rule groups once (process-wide, immutable)
//!   and owns rule evaluation, including the vendor attr overrides.
//! - `signature.rs`: builds the ephemeral composite text an element is
//!   matched on. Recomputed per element per scan; never cached.
//! - `resolver.rs`: candidate discovery (including best-effort frame
//!   traversal), the fill loop, and failure containment.
//! - `events.rs`: the synthetic input/change/blur sequence.
//! - `metrics.rs`: optional per-run observability.
//!
//! ## Debugging
//!
//! The engine traces through `tracing`: per-pattern tests at TRACE,
//! signatures and skips at DEBUG, pass summaries at INFO, contained
//! failures at WARN.

#[path = "engine/events.rs"]
mod events;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/signature.rs"]
mod signature;

pub use metrics::{Assignment, FillMetrics, FillOutcome, FillReport};
pub(crate) use registry::Registry;
pub(crate) use resolver::Resolver;
#[allow(unused_imports)]
pub(crate) use signature::Signature;
