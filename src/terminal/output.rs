//! Terminal output utilities.
//!
//! Box drawing, slider and meter bars, ANSI helpers. Drawing helpers return
//! lines so a whole frame can be written at once in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const YELLOW: &str = "\x1b[38;5;221m";
pub const GREEN: &str = "\x1b[38;5;120m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │ left                                     right │
pub fn box_split(left: &str, right: &str) -> String {
    let used = console_width(left) + console_width(right);
    let gap = INNER_WIDTH.saturating_sub(used);
    format!("│ {}{}{} │", left, " ".repeat(gap), right)
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Flag and description columns, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let flag_col = 24;
    let desc_col = INNER_WIDTH - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    let flag: String = flag.chars().take(flag_col).collect();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let left = if i == 0 { flag.as_str() } else { "" };
            box_line(&format!("{:<flag_col$}{}", left, line))
        })
        .collect()
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Slider and Meter
// ============================================================================

/// Track filled up to `percent`, with a knob at the fill edge.
pub fn slider_bar(percent: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let percent = percent.clamp(0.0, 100.0);
    let knob = ((percent / 100.0) * (width - 1) as f32).round() as usize;

    let mut bar = String::new();
    bar.push_str(GREEN);
    bar.push_str(&"━".repeat(knob));
    bar.push_str(RESET);
    bar.push_str(BOLD);
    bar.push('●');
    bar.push_str(RESET);
    bar.push_str(DIM);
    bar.push_str(&"─".repeat(width - 1 - knob));
    bar.push_str(RESET);
    bar
}

/// `lit` of `total` bars in `color`, the rest outlined.
pub fn meter(lit: usize, total: usize, color: &str) -> String {
    (0..total)
        .map(|i| {
            if i < lit {
                format!("{color}█{RESET}")
            } else {
                format!("{DIM}▯{RESET}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
