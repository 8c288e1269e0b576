//! Block framing for report headers.
//!
//! Framing adapts to the output medium at render time: interactive terminals
//! get full-width borders with centered text, captured streams get a fixed
//! plain rule that survives copy/paste into issue trackers.

use console::Term;

/// Width of the rule line used on the captured path.
pub const CAPTURED_RULE_WIDTH: usize = 28;

/// Where the rendered report is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    /// Not a terminal (pipe, file, CI log), or geometry unavailable.
    Captured,
    /// Interactive terminal with a known column count.
    Terminal { columns: usize },
}

impl Medium {
    /// Detect the medium for stdout.
    ///
    /// A stream that claims to be a terminal but reports no geometry is
    /// treated as captured rather than an error.
    pub fn detect() -> Self {
        let term = Term::stdout();
        if !term.is_term() {
            return Self::Captured;
        }
        match term.size_checked() {
            Some((_rows, columns)) => Self::Terminal {
                columns: columns as usize,
            },
            None => Self::Captured,
        }
    }
}

/// Frame text blocks for the given medium.
///
/// Captured framing always uses the fixed `=` rule; the fill character only
/// shapes interactive borders. Interactive framing centers each block within
/// the terminal width, except when any block is too wide to center, in which
/// case every block is emitted on its own line, unpadded and unframed.
/// An empty block list renders as empty output on both paths.
///
/// Widths are measured in characters, not bytes.
pub fn frame(blocks: &[&str], fill: char, medium: Medium) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    match medium {
        Medium::Captured => {
            let rule = "=".repeat(CAPTURED_RULE_WIDTH);
            format!("\n{rule}\n{}\n{rule}\n", blocks.join("\n"))
        }
        Medium::Terminal { columns } => {
            if blocks.iter().any(|b| b.chars().count() > columns) {
                let mut out = String::new();
                for block in blocks {
                    out.push_str(block);
                    out.push('\n');
                }
                return out;
            }

            let rule = fill.to_string().repeat(columns);
            let mut out = String::new();
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
            for block in blocks {
                out.push_str(&format!("{:^width$}", block, width = columns));
                out.push('\n');
            }
            out.push_str(&rule);
            out
        }
    }
}
