//! Block extraction.
//!
//! The extractor turns raw file content into a sequence of self-contained
//! [`Block`]s. Finding where a block *starts* is a regex problem (a `trait_*`
//! name followed by `=`); finding where it *ends* is not, because block bodies
//! nest arbitrarily deep and a non-counting regex would stop at the first
//! inner `}`. So the extractor matches the name, then runs an explicit
//! counter-based scan: `+1` on `{`, `-1` on `}`, block ends where the counter
//! returns to zero.
//!
//! ## Edge-case policy
//!
//! Two permissive behaviors are deliberate and relied on by callers:
//!
//! - A matched name with no `{` anywhere after it ends iteration. The rest of
//!   the input is silently dropped from the results (logged at debug level).
//! - A block whose braces never balance before end of input is still yielded,
//!   with its span running to the end of the input (logged as a warning).
//!
//! The scan cursor always resumes strictly after the previous block's end
//! offset, so yielded spans are non-overlapping and progress is forward-only
//! even on pathological input.

use crate::Block;
use tracing::{debug, warn};

/// Lazy iterator over the `trait_*` blocks of one file's content.
///
/// Created by [`crate::extract_blocks`]. Yields blocks in source order.
#[derive(Debug, Clone)]
pub struct BlockIter<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> BlockIter<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        BlockIter { content, pos: 0 }
    }
}

impl Iterator for BlockIter<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let caps = regex!(r"(trait_\w+)\s*=").captures_at(self.content, self.pos)?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?.as_str();

        let brace_start = match self.content[whole.end()..].find('{') {
            Some(offset) => whole.end() + offset,
            None => {
                // No body follows this assignment anywhere before end of
                // input. Iteration stops here; remaining content is dropped.
                debug!("{name}: no opening brace after assignment, stopping extraction");
                self.pos = self.content.len();
                return None;
            }
        };

        let bytes = self.content.as_bytes();
        let mut depth = 1usize;
        let mut end = brace_start + 1;
        while end < bytes.len() && depth > 0 {
            match bytes[end] {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
            end += 1;
        }

        if depth > 0 {
            warn!("{name}: braces never balance, taking span to end of input");
        }

        let text = self.content[whole.start()..end].trim().to_string();
        self.pos = end;

        Some(Block { name: name.to_string(), text })
    }
}
