//! Core types for folio-tui.
//!
//! These types flow through the whole crate: colors feed the theme and the
//! gradient text helpers, attributes feed the span renderer.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Special value: r=-1 means "terminal default" (let the terminal pick).
/// Serializes as a hex string (or "default") so content files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (no SGR color emitted).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_tui::types::Rgba;
    ///
    /// let violet = Rgba::from_rgb_int(0x8b5cf6);
    /// assert_eq!(violet, Rgba::rgb(139, 92, 246));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_tui::types::Rgba;
    ///
    /// let red = Rgba::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// // #RGB shorthand (expands each digit)
    /// let white = Rgba::from_hex("#fff").unwrap();
    /// assert_eq!(white, Rgba::rgb(255, 255, 255));
    ///
    /// // Without # prefix also works
    /// let blue = Rgba::from_hex("0000ff").unwrap();
    /// assert_eq!(blue, Rgba::rgb(0, 0, 255));
    ///
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as a lowercase hex string (#rrggbb, or #rrggbbaa when not opaque).
    ///
    /// Terminal default formats as "default".
    pub fn to_hex(&self) -> String {
        if self.is_terminal_default() {
            return "default".to_string();
        }
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)) as i16,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)) as i16,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)) as i16,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)) as i16,
        }
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    #[inline]
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return self;
        }
        Self {
            r: (self.r as f32 * factor).clamp(0.0, 255.0) as i16,
            g: (self.g as f32 * factor).clamp(0.0, 255.0) as i16,
            b: (self.b as f32 * factor).clamp(0.0, 255.0) as i16,
            a: self.a,
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "default" {
            return Ok(Self::TERMINAL_DEFAULT);
        }
        Self::from_hex(&value).ok_or_else(|| format!("invalid color: {value:?}"))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Text Alignment
// =============================================================================

/// Horizontal alignment of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_rgb_int_basic() {
        let red = Rgba::from_rgb_int(0xff0000);
        assert_eq!(red, Rgba::rgb(255, 0, 0));

        let green = Rgba::from_rgb_int(0x00ff00);
        assert_eq!(green, Rgba::rgb(0, 255, 0));

        let black = Rgba::from_rgb_int(0x000000);
        assert_eq!(black, Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn test_rgba_from_hex_rrggbb() {
        let violet = Rgba::from_hex("#8b5cf6").unwrap();
        assert_eq!(violet, Rgba::rgb(0x8b, 0x5c, 0xf6));

        let upper = Rgba::from_hex("#8B5CF6").unwrap();
        assert_eq!(upper, violet);
    }

    #[test]
    fn test_rgba_from_hex_shorthand_and_alpha() {
        let white = Rgba::from_hex("#fff").unwrap();
        assert_eq!(white, Rgba::rgb(255, 255, 255));

        let semi = Rgba::from_hex("#ff000080").unwrap();
        assert_eq!(semi, Rgba::new(255, 0, 0, 128));
    }

    #[test]
    fn test_rgba_from_hex_invalid() {
        assert!(Rgba::from_hex("#gg0000").is_none());
        assert!(Rgba::from_hex("#ffff").is_none());
        assert!(Rgba::from_hex("").is_none());
    }

    #[test]
    fn test_rgba_hex_round_trip() {
        let c = Rgba::rgb(0x12, 0xab, 0xef);
        assert_eq!(c.to_hex(), "#12abef");
        assert_eq!(Rgba::from_hex(&c.to_hex()).unwrap(), c);

        let with_alpha = Rgba::new(0x12, 0xab, 0xef, 0x80);
        assert_eq!(with_alpha.to_hex(), "#12abef80");
        assert_eq!(Rgba::from_hex(&with_alpha.to_hex()).unwrap(), with_alpha);
    }

    #[test]
    fn test_rgba_lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);

        assert_eq!(Rgba::lerp(a, b, 0.0), a);
        assert_eq!(Rgba::lerp(a, b, 1.0), b);

        let mid = Rgba::lerp(a, b, 0.5);
        assert_eq!(mid, Rgba::rgb(100, 50, 25));

        // t is clamped
        assert_eq!(Rgba::lerp(a, b, 2.0), b);
        assert_eq!(Rgba::lerp(a, b, -1.0), a);
    }

    #[test]
    fn test_rgba_dim() {
        let c = Rgba::rgb(100, 200, 50);
        assert_eq!(c.dim(0.5), Rgba::rgb(50, 100, 25));
        assert_eq!(c.dim(1.0), c);
        assert!(Rgba::TERMINAL_DEFAULT.dim(0.5).is_terminal_default());
    }

    #[test]
    fn test_rgba_serde_hex_string() {
        let c = Rgba::rgb(0x8b, 0x5c, 0xf6);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#8b5cf6\"");
        assert_eq!(serde_json::from_str::<Rgba>(&json).unwrap(), c);

        let default: Rgba = serde_json::from_str("\"default\"").unwrap();
        assert!(default.is_terminal_default());

        assert!(serde_json::from_str::<Rgba>("\"#zzz\"").is_err());
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::ITALIC));
        assert_eq!(Attr::default(), Attr::NONE);
    }
}
