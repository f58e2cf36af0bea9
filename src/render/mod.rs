//! Renderer - Styled lines to terminal bytes
//!
//! Turns [`Line`]s into ANSI output: alignment padding from display widths,
//! per-span SGR with strict reset discipline, and full-width background
//! painting so frames overwrite in place without clearing the screen.

use std::io::{self, Write};

use crate::types::{Rgba, TextAlign};
use crate::view::Line;

pub mod ansi;

// =============================================================================
// Line rendering
// =============================================================================

/// Render one line padded to `width` cells.
///
/// Alignment is resolved against the line's display width; the remainder of
/// the row is painted with the background so stale content from the previous
/// frame cannot show through.
pub fn render_line<W: Write>(
    w: &mut W,
    line: &Line,
    width: usize,
    background: Rgba,
) -> io::Result<()> {
    let has_bg = !background.is_terminal_default();
    let content = line.width();
    let pad = match line.align {
        TextAlign::Left => 0,
        TextAlign::Center => width.saturating_sub(content) / 2,
        TextAlign::Right => width.saturating_sub(content),
    };

    if has_bg {
        ansi::bg(w, background)?;
    }
    write!(w, "{}", " ".repeat(pad))?;

    for span in &line.spans {
        let styled = !span.fg.is_terminal_default() || !span.attrs.is_empty();
        if styled {
            ansi::attrs(w, span.attrs)?;
            ansi::fg(w, span.fg)?;
        }
        w.write_all(span.text.as_bytes())?;
        if styled {
            // Reset drops the background too, so restore it for the fill.
            ansi::reset(w)?;
            if has_bg {
                ansi::bg(w, background)?;
            }
        }
    }

    write!(w, "{}", " ".repeat(width.saturating_sub(pad + content)))?;
    ansi::reset(w)?;
    write!(w, "\r\n")
}

/// Render a whole page of lines at the given width.
pub fn render_page<W: Write>(
    w: &mut W,
    lines: &[Line],
    width: usize,
    background: Rgba,
) -> io::Result<()> {
    for line in lines {
        render_line(w, line, width, background)?;
    }
    Ok(())
}

/// Render lines with all styling stripped, newline-joined. Test surface.
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attr;
    use crate::view::Span;

    fn rendered(line: &Line, width: usize, bg: Rgba) -> String {
        let mut buf = Vec::new();
        render_line(&mut buf, line, width, bg).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_centered_line_pads_both_sides() {
        let line = Line::centered(vec![Span::colored("hi", Rgba::rgb(1, 2, 3))]);
        let out = rendered(&line, 6, Rgba::TERMINAL_DEFAULT);

        assert_eq!(
            out,
            "  \x1b[38;2;1;2;3mhi\x1b[0m  \x1b[0m\r\n"
        );
    }

    #[test]
    fn test_right_alignment() {
        let line = Line {
            spans: vec![Span::plain("ab")],
            align: TextAlign::Right,
        };
        let out = rendered(&line, 5, Rgba::TERMINAL_DEFAULT);
        assert_eq!(out, "   ab\x1b[0m\r\n");
    }

    #[test]
    fn test_background_painted_across_row() {
        let line = Line::new(vec![Span::plain("x")]);
        let out = rendered(&line, 3, Rgba::rgb(10, 20, 30));

        // Background opens the row and the fill keeps it through the width.
        assert_eq!(out, "\x1b[48;2;10;20;30mx  \x1b[0m\r\n");
    }

    #[test]
    fn test_styled_span_resets_before_fill() {
        let line = Line::new(vec![Span::new("t", Rgba::rgb(1, 1, 1), Attr::BOLD)]);
        let out = rendered(&line, 2, Rgba::rgb(9, 9, 9));

        assert_eq!(
            out,
            "\x1b[48;2;9;9;9m\x1b[1m\x1b[38;2;1;1;1mt\x1b[0m\x1b[48;2;9;9;9m \x1b[0m\r\n"
        );
    }

    #[test]
    fn test_overlong_line_never_underflows() {
        let line = Line::centered(vec![Span::plain("too wide")]);
        let out = rendered(&line, 4, Rgba::TERMINAL_DEFAULT);
        assert!(out.contains("too wide"));
    }

    #[test]
    fn test_plain_text_strips_styling() {
        let lines = vec![
            Line::new(vec![Span::new("a", Rgba::rgb(1, 2, 3), Attr::BOLD)]),
            Line::blank(),
            Line::new(vec![Span::plain("b")]),
        ];
        assert_eq!(plain_text(&lines), "a\n\nb");
    }
}
