//! Per-field matchers.
//!
//! The classifier only ever looks at five fields, so instead of a general
//! parser there is one small matcher per field. All of them take the first
//! occurrence within the block text and tolerate arbitrary whitespace around
//! the `=`.
//!
//! The braced captures (`allowed_archetypes`, `modifier`) use a non-greedy
//! dot-matches-newline pattern and therefore stop at the first `}` — they are
//! *not* nesting-aware. For the known data shapes (flat token lists, flat
//! modifier bodies) this is exact; a `modifier` body that itself nests braces
//! would be cut short. That limitation is accepted and documented here rather
//! than papered over with a second balanced scan.

/// Signed integer `cost` field. `None` when the field is absent or the digits
/// do not fit an `i64`.
pub(crate) fn cost(text: &str) -> Option<i64> {
    let caps = regex!(r"cost\s*=\s*([-+]?\d+)").captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Single-word `category` value; empty string when absent.
pub(crate) fn category(text: &str) -> String {
    word_value(text, regex!(r"category\s*=\s*(\w+)"))
}

/// Raw `advanced_trait` value; empty string when absent.
///
/// Deliberately *not* parsed as a boolean: the archetype branch rules compare
/// the raw text with two different predicates (see `rules::archetype`).
pub(crate) fn advanced_flag(text: &str) -> String {
    word_value(text, regex!(r"advanced_trait\s*=\s*(\w+)"))
}

/// Body of the first `allowed_archetypes = { ... }` list (non-nesting-aware).
pub(crate) fn archetype_list(text: &str) -> Option<&str> {
    braced_body(text, regex!(r"(?s)allowed_archetypes\s*=\s*\{(.*?)\}"))
}

/// Body of the first `modifier = { ... }` sub-block (non-nesting-aware).
pub(crate) fn modifier_body(text: &str) -> Option<&str> {
    braced_body(text, regex!(r"(?s)modifier\s*=\s*\{(.*?)\}"))
}

fn word_value(text: &str, re: &regex::Regex) -> String {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str().trim().to_string()).unwrap_or_default()
}

fn braced_body<'t>(text: &'t str, re: &regex::Regex) -> Option<&'t str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_parses_sign_and_whitespace() {
        assert_eq!(cost("cost = 2"), Some(2));
        assert_eq!(cost("cost=-1"), Some(-1));
        assert_eq!(cost("cost   =   +3"), Some(3));
        assert_eq!(cost("price = 2"), None);
    }

    #[test]
    fn word_fields_default_to_empty() {
        assert_eq!(category("category = cyborg_trait"), "cyborg_trait");
        assert_eq!(category("cost = 1"), "");
        assert_eq!(advanced_flag("advanced_trait = yes"), "yes");
        assert_eq!(advanced_flag(""), "");
    }

    #[test]
    fn archetype_list_captures_first_flat_body() {
        let text = "allowed_archetypes = {\n\tBIOLOGICAL LITHOID\n}";
        assert_eq!(archetype_list(text), Some("\n\tBIOLOGICAL LITHOID\n"));
        assert_eq!(archetype_list("cost = 1"), None);
    }

    #[test]
    fn modifier_body_stops_at_first_closing_brace() {
        let text = "modifier = {\n\tarmy_damage_mult = 0.1\n}\nmodifier = {\n\tupkeep = 1\n}";
        assert_eq!(modifier_body(text), Some("\n\tarmy_damage_mult = 0.1\n"));
    }
}
