//! Theme System for folio-tui.
//!
//! Semantic colors and gradients for the portfolio page. A theme names the
//! page background, text tiers, an accent, and the two gradients used for
//! the brand glyph and section headings. Gradients also color project cards
//! and social links, but those travel with the content, not the theme.
//!
//! # Example
//!
//! ```
//! use folio_tui::theme::get_preset;
//!
//! let theme = get_preset("midnight").unwrap();
//! let heading_start = theme.heading.at(0.0);
//! assert!(!heading_start.is_terminal_default());
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Rgba;

pub mod presets;

pub use presets::{get_preset, preset_names};

// =============================================================================
// Gradient
// =============================================================================

/// A two-stop linear gradient between RGBA endpoints.
///
/// Sampled per character to produce gradient text, the terminal counterpart
/// of CSS gradient-clipped headings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Rgba,
    pub stop: Rgba,
}

impl Gradient {
    /// Create a gradient from two endpoints.
    pub const fn new(start: Rgba, stop: Rgba) -> Self {
        Self { start, stop }
    }

    /// Solid "gradient" with both stops equal.
    pub const fn solid(color: Rgba) -> Self {
        Self {
            start: color,
            stop: color,
        }
    }

    /// Sample the gradient at `t` in [0, 1].
    pub fn at(&self, t: f32) -> Rgba {
        Rgba::lerp(self.start, self.stop, t)
    }

    /// Sample position `i` of `n` evenly spaced stops.
    ///
    /// A single stop samples the start color.
    pub fn step(&self, i: usize, n: usize) -> Rgba {
        if n <= 1 {
            return self.start;
        }
        self.at(i as f32 / (n - 1) as f32)
    }

    /// Midpoint color, used where one representative color is needed.
    pub fn mid(&self) -> Rgba {
        self.at(0.5)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// A named portfolio palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub description: String,
    /// Page background.
    pub background: Rgba,
    /// Body text.
    pub text: Rgba,
    /// Secondary text (descriptions, tech tags).
    pub text_muted: Rgba,
    /// Emphasized text (card titles).
    pub text_bright: Rgba,
    /// Accent color (typewriter line, call-to-action labels).
    pub accent: Rgba,
    /// Gradient for the nav brand and the hero name.
    pub brand: Gradient,
    /// Gradient for section headings.
    pub heading: Gradient,
}

impl Default for Theme {
    fn default() -> Self {
        presets::midnight()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints_and_midpoint() {
        let g = Gradient::new(Rgba::rgb(0, 0, 0), Rgba::rgb(200, 100, 50));

        assert_eq!(g.at(0.0), g.start);
        assert_eq!(g.at(1.0), g.stop);
        assert_eq!(g.mid(), Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn test_gradient_step_spacing() {
        let g = Gradient::new(Rgba::rgb(0, 0, 0), Rgba::rgb(100, 100, 100));

        assert_eq!(g.step(0, 5), g.start);
        assert_eq!(g.step(4, 5), g.stop);
        assert_eq!(g.step(2, 5), g.mid());

        // Degenerate cases sample the start.
        assert_eq!(g.step(0, 1), g.start);
        assert_eq!(g.step(0, 0), g.start);
    }

    #[test]
    fn test_gradient_solid() {
        let g = Gradient::solid(Rgba::rgb(10, 20, 30));
        assert_eq!(g.at(0.0), g.at(1.0));
    }

    #[test]
    fn test_default_theme_is_midnight() {
        assert_eq!(Theme::default().name, "midnight");
    }

    #[test]
    fn test_gradient_serde_round_trip() {
        let g = Gradient::new(Rgba::rgb(0x8b, 0x5c, 0xf6), Rgba::rgb(0xd9, 0x46, 0xef));
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r##"{"start":"#8b5cf6","stop":"#d946ef"}"##);
        assert_eq!(serde_json::from_str::<Gradient>(&json).unwrap(), g);
    }
}
