use std::fmt;

use crate::sanitize::sanitize_message;
use crate::width::{display_width, truncate_with_ellipsis};

/// Fullwidth space (U+3000) padding the message inside the frame.
const FULLWIDTH_SPACE: char = '　';

/// Columns reserved for the two fullwidth padding spaces around the body.
const PADDING_COLUMNS: usize = 4;

/// A laid-out speech-bubble frame.
///
/// Holds the three content lines; `Display` wraps them in a fenced code
/// block so chat renderers show the art as preformatted monospace text
/// instead of interpreting the fullwidth glyphs as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtFrame {
    pub top: String,
    pub middle: String,
    pub bottom: String,
    inner_width: usize,
    truncated: bool,
}

impl ArtFrame {
    /// Lay out `message` into a frame at most `max_width` columns wide.
    ///
    /// Total over any input: an empty message and budgets smaller than
    /// the frame padding still produce a well-formed minimal frame.
    pub fn compose(message: &str, max_width: usize) -> Self {
        let sanitized = sanitize_message(message);
        let budget = max_width.saturating_sub(PADDING_COLUMNS);
        let truncated = display_width(&sanitized) > budget;
        let body = truncate_with_ellipsis(&sanitized, budget);

        let inner = format!("{FULLWIDTH_SPACE}{body}{FULLWIDTH_SPACE}");
        let inner_width = display_width(&inner);

        // Border runs never drop below two repetitions, even for an
        // empty body.
        let people_count = inner_width.max(2);
        let y_repeat = ((inner_width + 1) / 2).max(2);

        Self {
            top: format!("＿{}＿", "人".repeat(people_count)),
            middle: format!("＞{inner}＜"),
            bottom: format!("￣{}￣", "Y^".repeat(y_repeat)),
            inner_width,
            truncated,
        }
    }

    /// Column width of the padded message between the `＞`/`＜` walls.
    pub fn inner_width(&self) -> usize {
        self.inner_width
    }

    /// Whether the message had to be cut to fit the width budget.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for ArtFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "```\n{}\n{}\n{}\n```", self.top, self.middle, self.bottom)
    }
}

/// Render `message` as a fenced totsuzen frame at most `max_width` columns
/// wide. This is the one-call entry point the command dispatch layer uses.
pub fn render_art(message: &str, max_width: usize) -> String {
    ArtFrame::compose(message, max_width).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_frame_proportions() {
        let frame = ArtFrame::compose("hello", 40);
        assert_eq!(frame.middle, "＞　hello　＜");
        assert_eq!(frame.inner_width(), 9);
        assert_eq!(frame.top, format!("＿{}＿", "人".repeat(9)));
        assert_eq!(frame.bottom, format!("￣{}￣", "Y^".repeat(5)));
        assert!(!frame.truncated());
    }

    #[test]
    fn output_is_a_five_line_fenced_block() {
        let rendered = render_art("hello", 40);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "```");
        assert_eq!(lines[4], "```");
    }

    #[test]
    fn empty_message_still_renders() {
        let frame = ArtFrame::compose("", 40);
        assert_eq!(frame.middle, "＞　　＜");
        assert_eq!(frame.inner_width(), 4);
        assert_eq!(frame.top, format!("＿{}＿", "人".repeat(4)));
        // ceil(5 / 2) = 2, which is also the floor of the border run.
        assert_eq!(frame.bottom, format!("￣{}￣", "Y^".repeat(2)));
    }

    #[test]
    fn long_message_is_cut_with_ellipsis() {
        let frame = ArtFrame::compose(&"x".repeat(100), 40);
        assert!(frame.truncated());
        assert!(frame.middle.contains('…'));
        assert!(frame.inner_width() <= 40);
    }

    #[test]
    fn wide_message_respects_budget() {
        let frame = ArtFrame::compose(&"突然の死".repeat(20), 40);
        assert!(frame.truncated());
        assert!(frame.inner_width() <= 40);
    }

    #[test]
    fn tiny_budget_does_not_underflow() {
        for max_width in 0..=4 {
            let rendered = render_art("anything", max_width);
            assert_eq!(rendered.lines().count(), 5);
        }
        // Budget 0 cannot fit even the ellipsis; budget 1 keeps it bare.
        let frame = ArtFrame::compose("anything", 0);
        assert_eq!(frame.middle, "＞　　＜");
        assert!(frame.truncated());
        let frame = ArtFrame::compose("anything", 5);
        assert_eq!(frame.middle, "＞　…　＜");
    }

    #[test]
    fn mentions_are_defused_in_the_frame() {
        let frame = ArtFrame::compose("@everyone", 40);
        assert!(frame.middle.contains("@\u{200B}everyone"));
        assert!(!frame.middle.contains("@everyone"));
    }

    #[test]
    fn newlines_are_flattened_into_one_line() {
        let frame = ArtFrame::compose("a\nb", 40);
        assert_eq!(frame.middle, "＞　a b　＜");
    }
}
