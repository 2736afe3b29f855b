// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pagesearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `PAGESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use pagesearch::{IndexStats, ResultEntry, ResultsContainer};
use std::io::{self, Write};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    (bg >= 7 && bg != 8).then_some(Theme::Light)
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("PAGESEARCH_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG").ok().as_deref().and_then(theme_from_colorfgbg) {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only for a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color with optional modifiers when `enabled`.
fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply a theme color with optional modifiers, TTY permitting.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Visible length, ignoring ANSI codes.
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

/// Cut to `max` visible chars, marking the cut with `…`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}├{}{}{}{}┤{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Prints entries the way the page lays them out: title, link, snippet.
///
/// Write errors can't surface through `ResultsContainer`, so the first one is
/// kept and handed back by [`TerminalContainer::finish`].
pub struct TerminalContainer<W: Write> {
    out: W,
    colors: bool,
    count: usize,
    error: Option<io::Error>,
}

impl TerminalContainer<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalContainer::new(io::stdout(), use_colors())
    }
}

impl<W: Write> TerminalContainer<W> {
    pub fn new(out: W, colors: bool) -> Self {
        TerminalContainer {
            out,
            colors,
            count: 0,
            error: None,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush, returning the first write error if there was one.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn render(&mut self, entry: &ResultEntry) -> io::Result<()> {
        let snippet = &entry.snippet;
        let body = match (&snippet.highlight, self.colors) {
            (Some(range), true) => format!(
                "{}{}{}",
                &snippet.text[..range.start],
                paint(true, YELLOW, &[BOLD, UNDERLINE], &snippet.text[range.clone()]),
                &snippet.text[range.end..],
            ),
            _ => snippet.text.clone(),
        };

        let number = format!("{:>3}.", self.count);
        writeln!(
            self.out,
            "{} {}",
            paint(self.colors, GRAY, &[], &number),
            paint(self.colors, BRIGHT_CYAN, &[BOLD], &entry.title)
        )?;
        writeln!(self.out, "     {}", paint(self.colors, BLUE, &[], &entry.href))?;
        if !snippet.is_empty() {
            writeln!(self.out, "     {}", body)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> ResultsContainer for TerminalContainer<W> {
    fn clear(&mut self) {
        self.count = 0;
    }

    fn append(&mut self, entry: &ResultEntry) {
        self.count += 1;
        if let Err(err) = self.render(entry) {
            self.error.get_or_insert(err);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_stats(source: &str, stats: &IndexStats) {
    section_top("INDEX");
    row(&format!(" source      {}", truncate_chars(source, BOX_WIDTH - 14)));
    row(&format!(" ref field   {}", stats.ref_field));
    row(&format!(" documents   {}", themed(GREEN, &[BOLD], &stats.docs.to_string())));
    row(&format!(" terms       {}", themed(GREEN, &[BOLD], &stats.terms().to_string())));
    row(&format!(" segments    {}", stats.segments));

    section_mid("FIELDS");
    row(&format!(" {:<14}{:>8}{:>12}{:>12}", "name", "boost", "avg len", "terms"));
    for field in &stats.fields {
        row(&format!(
            " {:<14}{:>8}{:>12.1}{:>12}",
            truncate_chars(&field.name, 13),
            field.boost,
            field.avg_len,
            field.terms
        ));
    }

    for field in stats.fields.iter().filter(|f| !f.top_terms.is_empty()) {
        section_mid(&format!("TOP TERMS: {}", field.name.to_uppercase()));
        for (term, doc_freq) in &field.top_terms {
            let term = themed(YELLOW, &[], &truncate_chars(term, 40));
            row(&format!(" {} {}", pad_right(&term, 42), themed(GRAY, &[], &format!("{} docs", doc_freq))));
        }
    }
    section_bot();
}

fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}
