//! Effects Module - Timer-driven animation state machines
//!
//! The only parts of the portfolio with real state-transition logic:
//!
//! - **Typewriter** - two-phase phrase cycling machine, logically ticked
//! - **Blink** - independent cursor visibility toggle
//! - **Handle** - timer threads, snapshot reads, cancellation

mod blink;
mod handle;
mod typewriter;

pub use blink::BlinkState;
pub use handle::{TypewriterHandle, start_typewriter};
pub use typewriter::{
    CURSOR_GLYPH, ConfigError, MIN_TICK_INTERVAL, Phase, Typewriter, TypewriterOptions,
};
