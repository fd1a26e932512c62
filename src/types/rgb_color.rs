// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and linear blending.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Smallest channel value the back light accepts.
///
/// The device misbehaves when a zone channel is exactly 0, so the encoder
/// raises zero channels to this value. Non-zero channels are sent as is.
pub const MIN_CHANNEL_VALUE: u8 = 1;

/// RGB color with 8-bit channels (0-255).
///
/// Any channel value is a valid color. The zero-channel quirk of the lamp is
/// applied only when the color is encoded, see [`RgbColor::to_device`].
///
/// # Examples
///
/// ```
/// use litra_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red.to_hex_with_hash(), "#FF0000");
///
/// // Zero channels are raised to 1 for the wire
/// assert_eq!(red.to_device(), [255, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts formats: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the hex string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use litra_lib::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF5733").unwrap();
    /// assert_eq!(color.green(), 87);
    ///
    /// let color = RgbColor::from_hex("#F00").unwrap();
    /// assert_eq!(color.red(), 255);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    // Expand 0-F to 0-255
                    *slot = parse_hex_char(c, hex)? * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = parse_hex_pair(&digits[0..2], hex)?;
                let g = parse_hex_pair(&digits[2..4], hex)?;
                let b = parse_hex_pair(&digits[4..6], hex)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the channels as written to a zone report.
    ///
    /// Channels equal to 0 become [`MIN_CHANNEL_VALUE`].
    #[must_use]
    pub const fn to_device(&self) -> [u8; 3] {
        [
            device_channel(self.red),
            device_channel(self.green),
            device_channel(self.blue),
        ]
    }

    /// Blends `self` towards `other` by `step / steps`.
    ///
    /// Each channel is interpolated on its own and rounded to nearest.
    /// `step = 0` yields `self` and `step = steps` yields `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, step: u8, steps: u8) -> Self {
        Self::new(
            lerp_channel(self.red, other.red, step, steps),
            lerp_channel(self.green, other.green, step, steps),
            lerp_channel(self.blue, other.blue, step, steps),
        )
    }

    /// Creates a pure red color.
    #[must_use]
    pub const fn red_color() -> Self {
        Self::new(255, 0, 0)
    }

    /// Creates a pure green color.
    #[must_use]
    pub const fn green_color() -> Self {
        Self::new(0, 255, 0)
    }

    /// Creates a pure blue color.
    #[must_use]
    pub const fn blue_color() -> Self {
        Self::new(0, 0, 255)
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex_with_hash()
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

const fn device_channel(value: u8) -> u8 {
    if value == 0 { MIN_CHANNEL_VALUE } else { value }
}

fn lerp_channel(from: u8, to: u8, step: u8, steps: u8) -> u8 {
    if steps == 0 {
        return from;
    }
    let step = u32::from(step.min(steps));
    let steps = u32::from(steps);
    let blended = (u32::from(from) * (steps - step) + u32::from(to) * step + steps / 2) / steps;
    // A weighted mean of two bytes stays within a byte
    u8::try_from(blended).unwrap_or(u8::MAX)
}

fn parse_hex_char(c: char, input: &str) -> Result<u8, ValueError> {
    c.to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidHexColor(input.to_string()))
}

fn parse_hex_pair(s: &str, input: &str) -> Result<u8, ValueError> {
    // from_str_radix would take a leading sign
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ValueError::InvalidHexColor(input.to_string()));
    }
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(input.to_string()))
}
