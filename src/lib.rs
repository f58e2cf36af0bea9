//! # folio-tui
//!
//! Animated terminal portfolio: a hero section with a typewriter effect and
//! blinking cursor, gradient-styled headings, a project showcase, and a
//! contact section, rendered as styled text in the terminal.
//!
//! ## Architecture
//!
//! The only stateful machinery lives in [`effects`]: a two-phase typewriter
//! state machine and an independent cursor blink toggle, driven by timer
//! threads behind a handle. Everything else is declarative:
//! ```text
//! Portfolio content + Theme → section builders → Lines of Spans → ANSI renderer
//! ```
//! Dynamic values (the live typewriter line, the hovered card) enter the
//! section builders per frame through [`view::PropValue`] bindings and plain
//! arguments; the builders themselves hold no state.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, TextAlign)
//! - [`effects`] - Typewriter + blink state machines and their timer runtime
//! - [`content`] - Portfolio data model, sample content, JSON loading
//! - [`theme`] - Palettes and gradients
//! - [`view`] - Drawable Span/Line nodes and page section builders
//! - [`render`] - ANSI output

pub mod content;
pub mod effects;
pub mod render;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use effects::{
    BlinkState, CURSOR_GLYPH, ConfigError, MIN_TICK_INTERVAL, Phase, Typewriter, TypewriterHandle,
    TypewriterOptions, start_typewriter,
};

pub use content::{ContentError, NavItem, Portfolio, Project, SocialLink};

pub use theme::{Gradient, Theme, get_preset, preset_names};

pub use view::{Line, PropValue, Span, gradient_spans, sections};

pub use render::{plain_text, render_line, render_page};
