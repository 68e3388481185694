//! Greedy word wrapping against measured glyph widths.

use crate::font::ResolvedFont;

/// Wrap `text` so every line's measured width stays within `max_width`.
///
/// Words are accumulated greedily. A single word wider than `max_width`
/// is split character-by-character, which also degrades gracefully for
/// scripts without spaces. Whitespace (including newlines) is
/// normalized to single spaces; blank input yields zero lines.
///
/// Deterministic given identical font metrics.
pub fn wrap(text: &str, font: &ResolvedFont, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if font.measure(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if font.measure(word) <= max_width {
            current = word.to_string();
        } else {
            split_long_word(word, font, max_width, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Hard-split a word that cannot fit on one line. Each fragment holds as
/// many characters as measure within `max_width`, always at least one so
/// progress is guaranteed.
fn split_long_word(word: &str, font: &ResolvedFont, max_width: u32, lines: &mut Vec<String>) {
    let mut part = String::new();
    for ch in word.chars() {
        let mut candidate = part.clone();
        candidate.push(ch);
        if part.is_empty() || font.measure(&candidate) <= max_width {
            part = candidate;
        } else {
            lines.push(std::mem::take(&mut part));
            part.push(ch);
        }
    }
    if !part.is_empty() {
        lines.push(part);
    }
}
