use serde::{Deserialize, Serialize};

/// 32-bit `0xAARRGGBB` color, the representation both native widgets accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Accepts both signed (JVM `Int`) and unsigned host encodings of the same bits.
    #[must_use]
    pub const fn from_wire(value: i64) -> Self {
        Self(value as u32)
    }

    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Replaces the alpha channel with `fraction` of full opacity.
    #[must_use]
    pub fn with_alpha_fraction(self, fraction: f64) -> Self {
        let alpha = (fraction.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self((alpha << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Channels normalized to `0..=1`, in `(red, green, blue, alpha)` order.
    #[must_use]
    pub fn to_rgba_f64(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
            f64::from(self.alpha()) / 255.0,
        )
    }
}
