//! Ordered-insertion tag collection.
//!
//! Tags are accumulated across several rule stages (cost polarity, category,
//! archetypes, modifier rules), and later stages must never re-add a tag an
//! earlier stage already produced. A plain `HashSet` would give dedup but lose
//! ordering, and the injected `tags` field must be deterministic for a given
//! input. `TagSet` keeps both properties: a tag is stored at most once, at the
//! position of its *first* insertion.
//!
//! The tag vocabulary is a closed set of `'static` labels, so no allocation is
//! needed per tag; membership checks are a linear scan over a vector that in
//! practice holds fewer than a dozen entries.

/// Deduplicated set of tag labels preserving first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    items: Vec<&'static str>,
}

impl TagSet {
    /// Create an empty `TagSet`.
    pub fn new() -> Self {
        TagSet { items: Vec::new() }
    }

    /// Insert `tag` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, tag: &'static str) -> bool {
        if self.items.contains(&tag) {
            return false;
        }
        self.items.push(tag);
        true
    }

    /// Merge every tag from `other` that is not already present, keeping
    /// `other`'s relative order for the newcomers.
    pub fn merge(&mut self, other: &TagSet) {
        for tag in &other.items {
            self.insert(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.items.iter().any(|t| *t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_and_keeps_order() {
        let mut tags = TagSet::new();
        assert!(tags.insert("positive"));
        assert!(tags.insert("machine"));
        assert!(!tags.insert("positive"));
        assert!(tags.insert("upkeep"));

        assert_eq!(tags.as_slice(), &["positive", "machine", "upkeep"]);
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn merge_skips_existing_tags() {
        let mut a = TagSet::new();
        a.insert("positive");
        a.insert("organic");

        let mut b = TagSet::new();
        b.insert("army");
        b.insert("organic");
        b.insert("pop_output");

        a.merge(&b);
        assert_eq!(a.as_slice(), &["positive", "organic", "army", "pop_output"]);
    }

    #[test]
    fn contains_and_empty() {
        let mut tags = TagSet::new();
        assert!(tags.is_empty());
        tags.insert("lithoid");
        assert!(tags.contains("lithoid"));
        assert!(!tags.contains("machine"));
        assert!(!tags.is_empty());
    }
}
