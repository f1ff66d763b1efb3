//! Tags-field injection.
//!
//! Rewrites a block's raw text so a synthesized `tags` field sits immediately
//! before the block's final closing brace. The exact shape is part of the
//! output contract:
//!
//! ```text
//! \ttags = {
//! \t\t"tag1"
//! \t\t"tag2"
//! \t}
//! ```
//!
//! The text preceding the insertion point is right-trimmed so the field
//! always starts on a fresh line regardless of how the source block ended.

use crate::TagSet;

/// Return `text` with a `tags` field listing `tags` inserted before its last
/// `}`. A pathological block with no `}` at all (unbalanced to end of input)
/// gets the field appended at the end instead.
pub(crate) fn inject_tags(text: &str, tags: &TagSet) -> String {
    let insert_at = text.rfind('}').unwrap_or(text.len());

    let mut out = String::with_capacity(text.len() + 16 + tags.len() * 16);
    out.push_str(text[..insert_at].trim_end());
    out.push_str("\n\ttags = {\n");
    for tag in tags.iter() {
        out.push_str("\t\t\"");
        out.push_str(tag);
        out.push_str("\"\n");
    }
    out.push_str("\t}\n");
    out.push_str(&text[insert_at..]);
    out
}
