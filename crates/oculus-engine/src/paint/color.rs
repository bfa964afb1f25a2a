use std::fmt;

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Matches the `One, OneMinusSrcAlpha` blend state used by the mesh renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses a CSS hex color: `#rrggbb` or `#rrggbbaa` (straight alpha).
    ///
    /// The leading `#` is required. Digits are case-insensitive.
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let hex = src
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::new(src, "missing leading '#'"))?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(src, "non-hex digit"));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            6 => (channel(0), channel(2), channel(4), Ok(255)),
            8 => (channel(0), channel(2), channel(4), channel(6)),
            n => {
                return Err(ColorParseError::new(
                    src,
                    format!("expected 6 or 8 hex digits, got {n}"),
                ));
            }
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_srgb_u8(r, g, b, a)),
            _ => Err(ColorParseError::new(src, "invalid hex digits")),
        }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// True when painting with this color cannot change the target.
    #[inline]
    pub fn is_invisible(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: String,
}

impl ColorParseError {
    fn new(input: &str, msg: impl Into<String>) -> Self {
        Self { input: input.to_string(), message: msg.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}
