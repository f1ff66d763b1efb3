//! Archetype branch rules.
//!
//! The `allowed_archetypes` list tells us what kind of entity a trait applies
//! to. Membership is scanned once into an [`ArchetypeSet`] bit mask, then a
//! fixed sequence of branches fires; branches are not mutually exclusive, so
//! e.g. `{ MACHINE BIOLOGICAL }` yields both `machine` and `organic`.
//!
//! ## The two "advanced" predicates
//!
//! The BIOLOGICAL and LITHOID branches gate `genetic_ascension` on the
//! `advanced_trait` value using *different* semantics:
//!
//! - BIOLOGICAL requires the value to be exactly `yes`.
//! - LITHOID only requires the value to be present (non-empty); `no` counts.
//!
//! The upstream data tooling this reimplements behaves exactly like that, and
//! tagged output is diffed against it, so the two predicates are kept
//! distinct on purpose. Unify them only as a deliberate, documented behavior
//! change.

use crate::TagSet;

bitflags::bitflags! {
    /// Membership mask over the known archetype tokens.
    ///
    /// Unknown tokens in the source list are ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArchetypeSet: u8 {
        const MACHINE    = 1 << 0;
        const ROBOT      = 1 << 1;
        const BIOLOGICAL = 1 << 2;
        const LITHOID    = 1 << 3;
        const PRESAPIENT = 1 << 4;
    }
}

/// Scan the whitespace-separated tokens of an `allowed_archetypes` body.
pub(crate) fn scan(list: &str) -> ArchetypeSet {
    let mut set = ArchetypeSet::empty();
    for token in list.split_whitespace() {
        match token {
            "MACHINE" => set |= ArchetypeSet::MACHINE,
            "ROBOT" => set |= ArchetypeSet::ROBOT,
            "BIOLOGICAL" => set |= ArchetypeSet::BIOLOGICAL,
            "LITHOID" => set |= ArchetypeSet::LITHOID,
            "PRESAPIENT" => set |= ArchetypeSet::PRESAPIENT,
            _ => {}
        }
    }
    set
}

/// Apply the archetype branches in their fixed order, appending to `tags`.
///
/// `advanced` is the raw `advanced_trait` value (empty string when the field
/// is absent).
pub(crate) fn apply(set: ArchetypeSet, advanced: &str, tags: &mut TagSet) {
    if set.intersects(ArchetypeSet::MACHINE | ArchetypeSet::ROBOT) {
        tags.insert("machine");
    }

    if set.contains(ArchetypeSet::BIOLOGICAL) {
        tags.insert("organic");
        if advanced_is_exactly_yes(advanced) {
            tags.insert("genetic_ascension");
        }
    }

    if set.contains(ArchetypeSet::LITHOID) && !set.contains(ArchetypeSet::BIOLOGICAL) {
        tags.insert("organic");
        tags.insert("lithoid");
        tags.insert("species");
        if advanced_is_set(advanced) {
            tags.insert("genetic_ascension");
        }
    }

    if set.contains(ArchetypeSet::PRESAPIENT) {
        tags.insert("presapient");
    }
}

/// Strict predicate used by the BIOLOGICAL branch: the literal text `yes`.
fn advanced_is_exactly_yes(advanced: &str) -> bool {
    advanced == "yes"
}

/// Loose predicate used by the LITHOID branch: any non-empty value.
fn advanced_is_set(advanced: &str) -> bool {
    !advanced.is_empty()
}
