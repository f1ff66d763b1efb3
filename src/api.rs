use crate::engine::{self, BlockIter, FileSummary, Outcome};
use crate::{Block, TagSet};

/// Separator between block texts in the rewritten file content.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Options that affect processing behavior.
///
/// This is intentionally minimal today; it is the growth point for future
/// knobs (block separator, name prefix) without breaking the function
/// signatures.
#[derive(Debug, Clone, Default)]
pub struct Options {
    // later: separator, name prefix, strict mode, etc.
}

/// Result from [`process_content`]: the rewritten file content plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// New file content: processed and preserved block texts joined by a
    /// blank line.
    pub output: String,
    /// Per-file outcome counters.
    pub summary: FileSummary,
}

/// How one block was handled, without the rewritten text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Added,
    Dropped,
    Preserved,
}

/// Per-block trace entry returned by [`process_content_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    pub name: String,
    pub outcome: OutcomeKind,
    /// Tags injected into the block; empty for skipped blocks.
    pub tags: TagSet,
}

/// Result from [`process_content_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResultVerbose {
    pub output: String,
    pub summary: FileSummary,
    /// One entry per extracted block, in source order.
    pub blocks: Vec<BlockReport>,
}

/// Extract the `trait_*` blocks of `content` without classifying them.
///
/// This exposes the first pipeline stage on its own; the returned iterator is
/// lazy and yields blocks in source order.
///
/// # Example
/// ```
/// use tagsmith::extract_blocks;
///
/// let blocks: Vec<_> = extract_blocks("trait_a = { cost = 1 }").collect();
/// assert_eq!(blocks[0].name, "trait_a");
/// ```
pub fn extract_blocks(content: &str) -> BlockIter<'_> {
    BlockIter::new(content)
}

/// Process one file's content: extract every block, classify it, and join the
/// surviving texts with a blank line.
///
/// The input is never mutated in place; the result holds the complete new
/// file content. Blocks without a `cost` field are omitted, blocks without an
/// `allowed_archetypes` list are kept verbatim, and everything else gets a
/// synthesized `tags` field.
pub fn process_content(content: &str, options: &Options) -> ProcessResult {
    let verbose = process_content_verbose(content, options);
    ProcessResult { output: verbose.output, summary: verbose.summary }
}

/// Like [`process_content`], but also returns a per-block trace for reporting.
pub fn process_content_verbose(content: &str, _options: &Options) -> ProcessResultVerbose {
    let mut summary = FileSummary::default();
    let mut texts: Vec<String> = Vec::new();
    let mut blocks: Vec<BlockReport> = Vec::new();

    for block in extract_blocks(content) {
        let outcome = engine::classify_block(&block);
        summary.record(&outcome);
        blocks.push(block_report(&block, &outcome));

        match outcome {
            Outcome::Added { text, .. } => texts.push(text),
            Outcome::Dropped => {}
            Outcome::Preserved => texts.push(block.text),
        }
    }

    ProcessResultVerbose { output: texts.join(BLOCK_SEPARATOR), summary, blocks }
}

fn block_report(block: &Block, outcome: &Outcome) -> BlockReport {
    let (kind, tags) = match outcome {
        Outcome::Added { tags, .. } => (OutcomeKind::Added, tags.clone()),
        Outcome::Dropped => (OutcomeKind::Dropped, TagSet::new()),
        Outcome::Preserved => (OutcomeKind::Preserved, TagSet::new()),
    };
    BlockReport { name: block.name.clone(), outcome: kind, tags }
}
