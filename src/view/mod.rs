//! View Module - Declarative drawable nodes
//!
//! The rendering surface the portfolio sections draw into: a [`Line`] is a
//! run of styled [`Span`]s plus an alignment. Content can be static, a
//! signal, or a getter via [`PropValue`], so dynamic pieces (the hero
//! typewriter line) rebuild from the live value on every frame while
//! everything else stays declarative data.
//!
//! # Reactivity
//!
//! ```
//! use folio_tui::view::PropValue;
//! use spark_signals::signal;
//!
//! let role = signal("Problem Solver".to_string());
//! let prop: PropValue<String> = role.clone().into();
//!
//! assert_eq!(prop.get(), "Problem Solver");
//! role.set("Tech Enthusiast".to_string());
//! assert_eq!(prop.get(), "Tech Enthusiast");
//! ```

use std::rc::Rc;

use spark_signals::Signal;
use unicode_width::UnicodeWidthStr;

use crate::theme::Gradient;
use crate::types::{Attr, Rgba, TextAlign};

pub mod sections;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Sections call [`PropValue::get`] while building their lines, so a getter
/// backed by a live effect is sampled fresh each frame.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// Span
// =============================================================================

/// A run of text with one foreground color and one attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Rgba,
    pub attrs: Attr,
}

impl Span {
    /// Styled span.
    pub fn new(text: impl Into<String>, fg: Rgba, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs,
        }
    }

    /// Unstyled span in the terminal default color.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Rgba::TERMINAL_DEFAULT, Attr::NONE)
    }

    /// Colored span without attributes.
    pub fn colored(text: impl Into<String>, fg: Rgba) -> Self {
        Self::new(text, fg, Attr::NONE)
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

// =============================================================================
// Line
// =============================================================================

/// A drawable line: spans plus horizontal alignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    pub align: TextAlign,
}

impl Line {
    /// Left-aligned line.
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            align: TextAlign::Left,
        }
    }

    /// Centered line.
    pub fn centered(spans: Vec<Span>) -> Self {
        Self {
            spans,
            align: TextAlign::Center,
        }
    }

    /// Empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Display width of all spans in terminal cells.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text with styling stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

// =============================================================================
// Gradient text
// =============================================================================

/// Split `text` into one span per character, colored by sampling `gradient`
/// evenly across the string.
pub fn gradient_spans(text: &str, gradient: &Gradient, attrs: Attr) -> Vec<Span> {
    let n = text.chars().count();
    text.chars()
        .enumerate()
        .map(|(i, c)| Span::new(c.to_string(), gradient.step(i, n), attrs))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_static_and_getter() {
        let stat: PropValue<String> = "fixed".to_string().into();
        assert_eq!(stat.get(), "fixed");

        let getter = PropValue::Getter(Rc::new(|| "computed".to_string()));
        assert_eq!(getter.get(), "computed");
    }

    #[test]
    fn test_prop_value_signal_tracks_updates() {
        let sig = signal(1i32);
        let prop: PropValue<i32> = sig.clone().into();

        assert_eq!(prop.get(), 1);
        sig.set(7);
        assert_eq!(prop.get(), 7);
    }

    #[test]
    fn test_line_width_counts_cells() {
        let line = Line::new(vec![Span::plain("ab"), Span::plain("cd")]);
        assert_eq!(line.width(), 4);

        // Wide glyphs count double.
        let wide = Line::new(vec![Span::plain("🦀")]);
        assert_eq!(wide.width(), 2);
    }

    #[test]
    fn test_line_plain_text() {
        let line = Line::new(vec![
            Span::colored("Hello, ", Rgba::rgb(1, 2, 3)),
            Span::new("world", Rgba::rgb(4, 5, 6), Attr::BOLD),
        ]);
        assert_eq!(line.plain_text(), "Hello, world");
    }

    #[test]
    fn test_gradient_spans_one_per_char() {
        let g = Gradient::new(Rgba::rgb(0, 0, 0), Rgba::rgb(100, 100, 100));
        let spans = gradient_spans("abcde", &g, Attr::BOLD);

        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].fg, g.start);
        assert_eq!(spans[4].fg, g.stop);
        assert_eq!(spans[2].fg, g.mid());
        assert!(spans.iter().all(|s| s.attrs == Attr::BOLD));
    }

    #[test]
    fn test_gradient_spans_empty_text() {
        let g = Gradient::solid(Rgba::WHITE);
        assert!(gradient_spans("", &g, Attr::NONE).is_empty());
    }
}
