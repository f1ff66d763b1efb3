//! Extraction and classification engine.
//!
//! This module is the *public entry point* for the two-stage core. The stages
//! are deliberately small and composed sequentially per block:
//!
//! ```text
//! file content
//!      │
//!      v
//! BlockIter (extract.rs)
//!   - match `trait_*` name assignments
//!   - balanced-brace scan to the block's exact end offset
//!      │  one (name, raw text) Block at a time, in source order
//!      v
//! classify_block (classify.rs)
//!   - field extraction (fields.rs)
//!   - archetype + modifier rule sets (crate::rules)
//!   - tags-field splicing (splice.rs)
//!      │
//!      v
//! Outcome { Added | Dropped | Preserved }  ──▶ FileSummary (summary.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `extract.rs`: nesting-aware block isolation. Purely a function of the
//!   input text and a forward-only scan cursor; no backtracking.
//! - `fields.rs`: the finite set of per-field matchers (`cost`, `category`,
//!   `advanced_trait`, `allowed_archetypes`, `modifier`). The source grammar
//!   is a flat `key = value` / `key = { tokens }` shape, so no general parser
//!   is needed.
//! - `classify.rs`: per-block orchestration. Applies the fixed rule order and
//!   returns an explicit [`Outcome`] so the asymmetric skip handling (drop vs
//!   preserve) is a tagged value rather than incidental control flow.
//! - `splice.rs`: rewrites a block's text with the synthesized `tags` field
//!   inserted immediately before its closing brace.
//! - `summary.rs`: per-file outcome counters for reporting.
//!
//! ## Error model
//!
//! Nothing in this module returns `Result`: every failure the engine can
//! encounter (missing field, malformed numeric line, unterminated block) is a
//! recovered, counted condition per the taxonomy in `classify.rs`/`extract.rs`.
//! Diagnostics go through `tracing` and are reporting-only.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/fields.rs"]
mod fields;
#[path = "engine/splice.rs"]
mod splice;
#[path = "engine/summary.rs"]
mod summary;

pub use classify::{Outcome, classify_block};
pub use extract::BlockIter;
pub use summary::FileSummary;

pub(crate) use splice::inject_tags;
