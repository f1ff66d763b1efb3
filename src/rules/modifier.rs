//! Modifier rule engine.
//!
//! A `modifier` sub-block lists numeric gameplay effects, one `key = value`
//! per line. Each line is checked against a fixed, ordered table of substring
//! rules; rules are independent, so one line can contribute several tags
//! (`jobs_bonus_leader` satisfies both the job-bonus rule and the `leader`
//! rule).
//!
//! Lines whose value fails to parse as a number are skipped with a warning;
//! a malformed line never aborts the block or the run.
//!
//! The job/category/planet-jobs bonus rules do not emit a tag per line.
//! They raise a block-wide flag instead, and a single `pop_output` tag is
//! appended once at the end if any of them saw a positive value.

use crate::TagSet;
use tracing::warn;

/// Condition a rule places on the parsed numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueGate {
    /// Fires for any numeric value.
    Any,
    /// Fires only for values strictly greater than zero.
    Positive,
}

/// What a fired rule contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    /// Emit a tag (deduplicated by the caller's `TagSet`).
    Tag(&'static str),
    /// Raise the block-wide job-bonus flag (emits `pop_output` once).
    NoteJobBonus,
}

struct ModifierRule {
    /// Key substrings; the rule fires if any of them occurs in the line key.
    keys: &'static [&'static str],
    gate: ValueGate,
    effect: Effect,
}

/// The ordered rule table. Order matters only for tag output ordering; every
/// applicable rule fires for every line.
const RULES: &[ModifierRule] = &[
    ModifierRule { keys: &["jobs_bonus", "cat_bonus", "planet_jobs"], gate: ValueGate::Positive, effect: Effect::NoteJobBonus },
    ModifierRule { keys: &["pop_environment_tolerance"], gate: ValueGate::Positive, effect: Effect::Tag("habitability") },
    ModifierRule { keys: &["leader"], gate: ValueGate::Positive, effect: Effect::Tag("leader") },
    ModifierRule { keys: &["army"], gate: ValueGate::Any, effect: Effect::Tag("army") },
    ModifierRule { keys: &["immigration"], gate: ValueGate::Any, effect: Effect::Tag("migration") },
    ModifierRule { keys: &["growth_mult"], gate: ValueGate::Any, effect: Effect::Tag("pop_growth") },
    ModifierRule { keys: &["livestock"], gate: ValueGate::Any, effect: Effect::Tag("livestock") },
    ModifierRule { keys: &["housing_usage"], gate: ValueGate::Any, effect: Effect::Tag("housing") },
    ModifierRule { keys: &["upkeep"], gate: ValueGate::Any, effect: Effect::Tag("upkeep") },
];

/// Classify one modifier body into a deduplicated, deterministically ordered
/// tag set.
pub(crate) fn classify_modifier(body: &str) -> TagSet {
    let mut tags = TagSet::new();
    let mut has_positive_job_bonus = false;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        let value: f64 = match value.parse() {
            Ok(v) => v,
            Err(_) => {
                warn!("strange value {value:?} for modifier key {key:?}, skipping line");
                continue;
            }
        };

        for rule in RULES {
            if !rule.keys.iter().any(|k| key.contains(k)) {
                continue;
            }
            if rule.gate == ValueGate::Positive && value <= 0.0 {
                continue;
            }
            match rule.effect {
                Effect::Tag(tag) => {
                    tags.insert(tag);
                }
                Effect::NoteJobBonus => has_positive_job_bonus = true,
            }
        }
    }

    if has_positive_job_bonus {
        tags.insert("pop_output");
    }

    tags
}
