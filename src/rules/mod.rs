//! Classification rule sets.
//!
//! Two independent rule sets contribute tags to a block:
//!
//! - `archetype`: structural tags derived from membership in the
//!   `allowed_archetypes` token list (machine vs organic vs presapient, and
//!   the genetic-ascension qualifiers).
//! - `modifier`: auxiliary tags derived from the numeric `key = value` lines
//!   of a nested `modifier` sub-block (job output, habitability, army,
//!   migration, and so on).
//!
//! Both sets are *ordered* and their rules are independent: a single input can
//! satisfy several rules and contribute several tags. Deduplication happens in
//! [`crate::TagSet`], never inside a rule.

pub(crate) mod archetype;
pub(crate) mod modifier;
