// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the majuscule CLI.
//!
//! One box per input: the ranked hashtags with their word split and score,
//! optionally the scored matches, and the two phase timings at the bottom.
//! OneDark colors on a TTY, plain text when piped or when `NO_COLOR` is set.

use majuscule::service::CompleteResponse;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[38;2;86;182;194m"; // #56b6c2
    pub const GREEN: &str = "\x1b[38;2;152;195;121m"; // #98c379
    pub const YELLOW: &str = "\x1b[38;2;229;192;123m"; // #e5c07b
    pub const GRAY: &str = "\x1b[38;2;92;99;112m"; // #5c6370
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    styled(&[GRAY], s)
}

/// Content line: │ content          │
fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"))
}

/// Section header: ┌─ LABEL ──────────┐
fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("{}{}{}", border("┌"), label_part, border(&format!("{}┐", "─".repeat(remaining))))
}

/// Section divider: ├─ LABEL ──────────┤
fn section_mid(label: &str) -> String {
    let label_part = format!("─ {} ", styled(&[DIM], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("{}{}{}", border("├"), label_part, border(&format!("{}┤", "─".repeat(remaining))))
}

/// Section footer: └──────────────────┘
fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// RESPONSES
// ═══════════════════════════════════════════════════════════════════════════

/// Format a duration in nanoseconds for humans.
pub fn format_duration_ns(ns: u64) -> String {
    match ns {
        0..=999 => format!("{}ns", ns),
        1_000..=999_999 => format!("{:.1}µs", ns as f64 / 1e3),
        _ => format!("{:.2}ms", ns as f64 / 1e6),
    }
}

/// Render one response as a box.
pub fn render_response(response: &CompleteResponse) -> String {
    let mut lines = vec![section_top(&response.input)];

    if response.hashtags.is_empty() {
        lines.push(row(&styled(&[DIM], "  (no suggestions)")));
    }
    for (rank, hashtag) in response.hashtags.iter().enumerate() {
        let content = format!(
            "  {:>2}. {:<28} {:<28} {}",
            rank + 1,
            hashtag.tag,
            hashtag.words.join(" "),
            styled(&[YELLOW], &format!("{:>8.2}", hashtag.score)),
        );
        lines.push(row(&styled(&[GREEN], &content)));
    }

    if let Some(matches) = &response.matches {
        lines.push(section_mid("matches"));
        for m in matches {
            lines.push(row(&format!("  {:>3}  {:<32} {:>10.4}", m.pos, m.word, m.score)));
        }
    }

    lines.push(section_mid("timing"));
    lines.push(row(&format!(
        "  match {}   suggest {}",
        format_duration_ns(response.match_duration_ns),
        format_duration_ns(response.suggest_duration_ns)
    )));
    lines.push(section_bot());
    lines.join("\n")
}

/// REPL line: `<word count> - <Tag>`.
pub fn repl_line(word_count: usize, tag: &str) -> String {
    format!("{} - {}", word_count, tag)
}
