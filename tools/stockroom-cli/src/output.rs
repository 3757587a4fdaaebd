//! Output formatting for the CLI.

use console::{measure_text_width, pad_str, style, truncate_str, Alignment};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a boxed table. See [`render_table`].
    pub fn table(&self, head: &[&str], rows: &[Vec<String>], widths: &[usize]) {
        println!("{}", render_table(head, rows, widths));
    }

    /// Print a large title line.
    pub fn banner(&self, title: &str) {
        println!("{}", style(banner_text(title)).yellow().bold());
    }
}

/// Render a table with box-drawing borders.
///
/// `widths` are total column widths in terminal columns, including one space
/// of padding on each side. Cells that don't fit are cut and end in `…`. An
/// empty row renders as a horizontal rule.
pub fn render_table(head: &[&str], rows: &[Vec<String>], widths: &[usize]) -> String {
    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[&str]| {
        let formatted: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| fit_cell(cells.get(i).copied().unwrap_or(""), *width))
            .collect();
        format!("│{}│", formatted.join("│"))
    };

    let mut out = vec![rule("┌", "┬", "┐"), line(head), rule("├", "┼", "┤")];
    for row in rows {
        if row.is_empty() {
            out.push(rule("├", "┼", "┤"));
        } else {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push(line(&cells));
        }
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

fn fit_cell(text: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    // A wide character cut at the edge can leave the text one column short.
    let shown = truncate_str(text, inner, "…");
    format!(" {} ", pad_str(&shown, inner, Alignment::Left, None))
}

fn banner_text(title: &str) -> String {
    let bar = "═".repeat(measure_text_width(title) + 4);
    format!("╔{bar}╗\n║  {title}  ║\n╚{bar}╝")
}
