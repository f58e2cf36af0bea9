//! Typewriter Effect - Phrase cycling state machine
//!
//! Cycles through a fixed list of phrases: each phrase is revealed
//! character-by-character, held fully visible for a dwell pause, erased
//! character-by-character, and then the next phrase begins, looping forever.
//!
//! The machine is purely logical: [`Typewriter::tick`] performs one state
//! transition and returns the delay until the next tick should fire. Timers
//! live in [`crate::effects::handle`]; tests drive the machine with plain
//! tick calls and never sleep.
//!
//! # Example
//!
//! ```
//! use folio_tui::effects::{Typewriter, TypewriterOptions};
//!
//! let phrases = vec!["Rustacean".to_string(), "Tinkerer".to_string()];
//! let mut tw = Typewriter::new(phrases, TypewriterOptions::default()).unwrap();
//!
//! tw.tick();
//! tw.tick();
//! assert_eq!(tw.visible_text(), "Ru");
//! ```

use std::time::Duration;

use thiserror::Error;

/// Floor applied to every scheduled progression delay, bounding timer churn
/// when an interval is configured very low.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Cursor glyph appended to the visible text while the cursor phase is on.
pub const CURSOR_GLYPH: char = '|';

// =============================================================================
// Errors
// =============================================================================

/// Rejected typewriter configuration.
///
/// Raised synchronously when an effect is constructed; once a machine exists
/// no later operation can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The phrase list was empty.
    #[error("phrase list is empty")]
    EmptyPhrases,

    /// An interval was configured as zero.
    #[error("{name} must be a positive duration")]
    ZeroInterval { name: &'static str },
}

// =============================================================================
// Options
// =============================================================================

/// Timing configuration for the typewriter effect.
///
/// All intervals must be positive; [`TypewriterOptions::validate`] rejects
/// zero durations. Defaults reproduce the classic portfolio pacing: type at
/// 100ms per character, dwell 2s on the finished phrase, erase faster than
/// typing, blink the cursor every 500ms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterOptions {
    /// Delay between character reveals.
    pub typing_interval: Duration,
    /// Dwell on the fully typed phrase before erasing starts.
    pub pause_after_typing: Duration,
    /// Delay between character erasures.
    pub erasing_interval: Duration,
    /// Period of the independent cursor blink toggle.
    pub cursor_blink_interval: Duration,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self::from_speed(Duration::from_millis(100))
    }
}

impl TypewriterOptions {
    /// Derive all intervals from a single typing speed.
    ///
    /// The dwell pause is 20x the speed and erasing runs at 3/4 of it.
    /// Blink stays fixed at 500ms.
    pub fn from_speed(speed: Duration) -> Self {
        Self {
            typing_interval: speed,
            pause_after_typing: speed * 20,
            erasing_interval: speed * 3 / 4,
            cursor_blink_interval: Duration::from_millis(500),
        }
    }

    /// Check that every interval is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("typing_interval", self.typing_interval),
            ("pause_after_typing", self.pause_after_typing),
            ("erasing_interval", self.erasing_interval),
            ("cursor_blink_interval", self.cursor_blink_interval),
        ];
        for (name, interval) in intervals {
            if interval.is_zero() {
                return Err(ConfigError::ZeroInterval { name });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Phase
// =============================================================================

/// Direction of the progression state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing characters of the current phrase.
    Typing,
    /// Removing characters of the current phrase.
    Erasing,
}

// =============================================================================
// Typewriter
// =============================================================================

/// The typewriter progression state machine.
///
/// State is the current phrase index, the count of visible characters
/// (counted in `char`s, so multi-byte phrases are safe), and the phase.
/// Invariants held across any tick sequence:
///
/// - `visible` stays within `[0, current phrase length]`
/// - the phase flips to [`Phase::Erasing`] only at full length
/// - the erase tick that removes the last character also advances the phrase
///   by exactly one (mod list length) and flips back to [`Phase::Typing`],
///   so phrases are visited strictly in order
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    options: TypewriterOptions,
    phrase: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    /// Create a machine at the start of the first phrase.
    ///
    /// Fails if `phrases` is empty or any configured interval is zero.
    pub fn new(phrases: Vec<String>, options: TypewriterOptions) -> Result<Self, ConfigError> {
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        options.validate()?;
        Ok(Self {
            phrases,
            options,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
        })
    }

    /// Advance the machine by one progression tick.
    ///
    /// Returns the delay until the next tick, never below
    /// [`MIN_TICK_INTERVAL`]. Typing ticks reveal one character; the tick at
    /// full length flips to erasing and returns the dwell pause; erase ticks
    /// remove one character, and the one that empties the phrase moves on to
    /// the next phrase.
    pub fn tick(&mut self) -> Duration {
        let delay = match self.phase {
            Phase::Typing => {
                if self.visible < self.phrase_len() {
                    self.visible += 1;
                    self.options.typing_interval
                } else {
                    self.phase = Phase::Erasing;
                    self.options.pause_after_typing
                }
            }
            Phase::Erasing => {
                if self.visible > 0 {
                    self.visible -= 1;
                    if self.visible == 0 {
                        self.advance_phrase();
                        self.options.typing_interval
                    } else {
                        self.options.erasing_interval
                    }
                } else {
                    // Empty phrase: nothing to erase, move straight on.
                    self.advance_phrase();
                    self.options.typing_interval
                }
            }
        };
        delay.max(MIN_TICK_INTERVAL)
    }

    fn advance_phrase(&mut self) {
        self.phase = Phase::Typing;
        self.phrase = (self.phrase + 1) % self.phrases.len();
    }

    /// The currently visible prefix of the current phrase.
    pub fn visible_text(&self) -> &str {
        let phrase = &self.phrases[self.phrase];
        match phrase.char_indices().nth(self.visible) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Compose the display string: visible text plus the cursor glyph when
    /// the blink phase is on. This is the only point where the progression
    /// and blink machines meet.
    pub fn display(&self, cursor_visible: bool) -> String {
        let mut out = self.visible_text().to_string();
        if cursor_visible {
            out.push(CURSOR_GLYPH);
        }
        out
    }

    /// Index of the phrase currently being typed or erased.
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Count of currently visible characters.
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The phrase list driving the effect.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Timing configuration.
    pub fn options(&self) -> &TypewriterOptions {
        &self.options
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.phrase].chars().count()
    }
}

// =============================================================================
// Tests
// =============================================================================
