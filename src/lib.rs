extern crate self as tagsmith;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

mod tag_set;

pub use api::{
    BlockReport, Options, OutcomeKind, ProcessResult, ProcessResultVerbose, extract_blocks, process_content,
    process_content_verbose,
};
pub use engine::{BlockIter, FileSummary, Outcome};
pub use tag_set::TagSet;

// --- Internal types ---------------------------------------------------------

/// One complete named, brace-delimited record lifted out of a definition file.
///
/// The span starts at the first byte of the matched name and ends at the
/// closing brace that balances the first opening brace after the `=`. Inner
/// nesting is fully balanced inside `text` (for well-formed input), so a
/// `Block` is self-contained: it can be classified, rewritten, or passed
/// through without looking at the rest of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The matched name token, e.g. `trait_strong`.
    pub name: String,
    /// Raw source text of the block, leading/trailing whitespace trimmed.
    pub text: String,
}
