use std::path::Path;
use tagsmith::{OutcomeKind, ProcessResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the per-file terminal report: one compact line per block plus the
/// outcome counters. This is observability only; the data contract is the
/// written output file.
pub fn print_file(path: &Path, res: &ProcessResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  {}", path.display()), ansi::CYAN)));

    for block in &res.blocks {
        match block.outcome {
            OutcomeKind::Added => {
                let tags = block.tags.as_slice().join(", ");
                println!(
                    "  {} {} {} {}",
                    palette.paint("✓", ansi::GREEN),
                    block.name,
                    palette.dim("│ tags:"),
                    palette.paint(tags, ansi::GREEN),
                );
            }
            OutcomeKind::Dropped => {
                println!(
                    "  {} {} {}",
                    palette.paint("✗", ansi::YELLOW),
                    block.name,
                    palette.dim("│ dropped (no cost)"),
                );
            }
            OutcomeKind::Preserved => {
                println!(
                    "  {} {} {}",
                    palette.paint("∅", ansi::GRAY),
                    block.name,
                    palette.dim("│ preserved (no allowed_archetypes)"),
                );
            }
        }
    }

    let s = &res.summary;
    println!(
        "  {}: {}  │  {}: {}  │  {}: {}",
        palette.dim("added"),
        palette.paint(s.added.to_string(), ansi::GREEN),
        palette.dim("dropped"),
        palette.paint(s.dropped_missing_cost.to_string(), ansi::YELLOW),
        palette.dim("preserved"),
        palette.paint(s.preserved_missing_archetypes.to_string(), ansi::GRAY),
    );
}
