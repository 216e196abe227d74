//! Colour mapping — linear RGB interpolation between two endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::HighlightError;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HighlightError::InvalidColor {
            value: s.to_string(),
        };
        let cap = HEX_COLOR.captures(s.trim()).ok_or_else(invalid)?;
        let channel = |i: usize| u8::from_str_radix(&cap[i], 16).map_err(|_| invalid());
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Maps a normalized score onto the gradient `low..=high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb) -> Self {
        Self { low, high }
    }

    /// Interpolated colour for `ratio`, clamped to `[0, 1]`.
    ///
    /// Channels are truncated toward the low endpoint, so `0.0` and `1.0`
    /// reproduce the endpoints exactly.
    pub fn at(&self, ratio: f64) -> Rgb {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * ratio) as u8;
        Rgb::new(
            lerp(self.low.r, self.high.r),
            lerp(self.low.g, self.high.g),
            lerp(self.low.b, self.high.b),
        )
    }

    pub fn hex_at(&self, ratio: f64) -> String {
        self.at(ratio).to_string()
    }
}
