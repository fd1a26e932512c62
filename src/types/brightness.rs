// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for the front and back lights.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 1-100%. A lamp that
//! is switched on cannot be at 0%, so zero is rejected like any other
//! out-of-range value.

use std::fmt;

use crate::error::ValueError;

/// Lowest device byte the front light accepts for brightness (1%).
pub const FRONT_BRIGHTNESS_MIN_BYTE: u8 = 0x14;

/// Highest device byte the front light accepts for brightness (100%).
pub const FRONT_BRIGHTNESS_MAX_BYTE: u8 = 0xFA;

/// Brightness level as a percentage (1-100).
///
/// # Examples
///
/// ```
/// use litra_lib::types::Brightness;
///
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// assert_eq!(Brightness::MIN.front_byte(), 20);
/// assert_eq!(Brightness::MAX.front_byte(), 250);
///
/// // Invalid values return error, they are never clamped
/// assert!(Brightness::new(0).is_err());
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (1%).
    pub const MIN: Self = Self(1);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1, 100].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN.0),
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Maps the percentage onto the front light's native byte range.
    ///
    /// `round((p - 1) / 99 * (250 - 20)) + 20`, computed in integers.
    #[must_use]
    // scaled <= SPAN, so the sum fits in a byte
    #[allow(clippy::cast_possible_truncation)]
    pub const fn front_byte(&self) -> u8 {
        const SPAN: u16 = (FRONT_BRIGHTNESS_MAX_BYTE - FRONT_BRIGHTNESS_MIN_BYTE) as u16;
        const STEPS: u16 = (Brightness::MAX.0 - Brightness::MIN.0) as u16;

        let offset = (self.0 - Self::MIN.0) as u16;
        let scaled = (offset * SPAN + STEPS / 2) / STEPS;
        scaled as u8 + FRONT_BRIGHTNESS_MIN_BYTE
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
