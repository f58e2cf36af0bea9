//! Theme presets for folio-tui.
//!
//! Built-in palettes:
//! - midnight (default - deep gray-black with purple/pink/cyan gradients)
//! - dracula
//! - nord
//! - paper (light)

use super::{Gradient, Theme};
use crate::types::Rgba;

// =============================================================================
// Midnight (Default)
// =============================================================================

/// Midnight theme - the portfolio's native look: near-black background,
/// purple-to-pink brand gradient, purple-to-cyan headings.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        description: "Deep gray-black with purple/pink/cyan gradients".to_string(),
        background: Rgba::from_rgb_int(0x111827),
        text: Rgba::from_rgb_int(0xe5e7eb),
        text_muted: Rgba::from_rgb_int(0x9ca3af),
        text_bright: Rgba::WHITE,
        accent: Rgba::from_rgb_int(0x22d3ee),
        brand: Gradient::new(Rgba::from_rgb_int(0xc084fc), Rgba::from_rgb_int(0xf472b6)),
        heading: Gradient::new(Rgba::from_rgb_int(0xc084fc), Rgba::from_rgb_int(0x22d3ee)),
    }
}

// =============================================================================
// Dracula
// =============================================================================

/// Dracula theme.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        description: "Dark theme with vibrant colors".to_string(),
        background: Rgba::from_rgb_int(0x282a36),
        text: Rgba::from_rgb_int(0xf8f8f2),
        text_muted: Rgba::from_rgb_int(0x6272a4),
        text_bright: Rgba::WHITE,
        accent: Rgba::from_rgb_int(0x8be9fd),
        brand: Gradient::new(Rgba::from_rgb_int(0xbd93f9), Rgba::from_rgb_int(0xff79c6)),
        heading: Gradient::new(Rgba::from_rgb_int(0xbd93f9), Rgba::from_rgb_int(0x8be9fd)),
    }
}

// =============================================================================
// Nord
// =============================================================================

/// Nord theme.
pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        description: "Arctic, north-bluish palette".to_string(),
        background: Rgba::from_rgb_int(0x2e3440),
        text: Rgba::from_rgb_int(0xd8dee9),
        text_muted: Rgba::from_rgb_int(0x4c566a),
        text_bright: Rgba::from_rgb_int(0xeceff4),
        accent: Rgba::from_rgb_int(0x88c0d0),
        brand: Gradient::new(Rgba::from_rgb_int(0xb48ead), Rgba::from_rgb_int(0x81a1c1)),
        heading: Gradient::new(Rgba::from_rgb_int(0x81a1c1), Rgba::from_rgb_int(0x8fbcbb)),
    }
}

// =============================================================================
// Paper
// =============================================================================

/// Paper theme - light background for bright terminals.
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        description: "Light background, ink text".to_string(),
        background: Rgba::from_rgb_int(0xfafaf9),
        text: Rgba::from_rgb_int(0x1c1917),
        text_muted: Rgba::from_rgb_int(0x78716c),
        text_bright: Rgba::BLACK,
        accent: Rgba::from_rgb_int(0x0891b2),
        brand: Gradient::new(Rgba::from_rgb_int(0x7c3aed), Rgba::from_rgb_int(0xdb2777)),
        heading: Gradient::new(Rgba::from_rgb_int(0x7c3aed), Rgba::from_rgb_int(0x0891b2)),
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Look up a preset theme by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "midnight" => Some(midnight()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "paper" => Some(paper()),
        _ => None,
    }
}

/// Names of all built-in presets.
pub fn preset_names() -> &'static [&'static str] {
    &["midnight", "dracula", "nord", "paper"]
}
