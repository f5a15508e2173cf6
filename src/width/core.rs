use unicode_width::UnicodeWidthChar;

/// Single-character ellipsis appended when truncation occurred.
pub const ELLIPSIS: char = '…';

/// Terminal column width of a single code point.
///
/// Width policy: code points `unicode-width` cannot measure (controls and
/// other unassigned values) count 0, never negative. Default-ignorable
/// code points (zero-width space, variation selectors) also measure 0;
/// East Asian Wide and Fullwidth forms measure 2.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Compute the display width of a string after stripping ANSI escapes.
///
/// The result is the per-code-point sum, not grapheme-cluster width. The
/// frame proportions are derived from this measurement, so it must stay
/// code-point-wise even where grapheme clustering would measure emoji
/// sequences differently.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    clean_str.chars().map(char_width).sum()
}

/// Cut `text` to fit `max_width` columns, appending `…` when a cut happened.
///
/// Strings already within budget pass through untouched, without an
/// ellipsis. Otherwise the longest code-point prefix whose width plus the
/// ellipsis fits the budget is kept. A budget of zero cannot fit even the
/// ellipsis and yields an empty string.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    for ch in text.chars() {
        let mut candidate = out.clone();
        candidate.push(ch);
        candidate.push(ELLIPSIS);
        if display_width(&candidate) > max_width {
            break;
        }
        out.push(ch);
    }

    if char_width(ELLIPSIS) <= max_width {
        out.push(ELLIPSIS);
    }
    out
}
