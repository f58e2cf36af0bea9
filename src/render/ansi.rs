//! ANSI escape sequences for terminal output.
//!
//! The escape sequences the line renderer needs: truecolor SGR, attribute
//! flags, reset, and the cursor/clear/synchronized-output controls used by
//! the frame loop.

use std::io::{self, Write};

use crate::types::{Attr, Rgba};

// =============================================================================
// Colors
// =============================================================================

/// Set foreground color (TrueColor). Terminal default emits nothing.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        return Ok(());
    }
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set background color (TrueColor). Terminal default emits nothing.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        return Ok(());
    }
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

// =============================================================================
// Attributes
// =============================================================================

/// Set text attributes as a single SGR sequence. Empty flags emit nothing.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }
    write!(w, "\x1b[")?;
    let mut first = true;
    for (flag, code) in [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
    ] {
        if attr.contains(flag) {
            if !first {
                write!(w, ";")?;
            }
            write!(w, "{code}")?;
            first = false;
        }
    }
    write!(w, "m")
}

/// Reset all SGR state.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

// =============================================================================
// Screen control
// =============================================================================

/// Move the cursor to the top-left corner.
#[inline]
pub fn cursor_home<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[H")
}

/// Clear from the cursor to the end of the screen.
#[inline]
pub fn clear_below<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[J")
}

/// Begin synchronized output (flicker-free frame).
#[inline]
pub fn sync_begin<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output.
#[inline]
pub fn sync_end<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Tests
// =============================================================================
