// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature type for the front light.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in Kelvin (2700-6500).
///
/// The front light takes Kelvin directly, split big-endian over two payload
/// bytes. Lower values are warmer, higher values are cooler.
///
/// # Examples
///
/// ```
/// use litra_lib::types::ColorTemperature;
///
/// let ct = ColorTemperature::new(3200).unwrap();
/// assert_eq!(ct.value(), 3200);
/// assert_eq!(ct.to_be_bytes(), [0x0C, 0x80]);
///
/// assert!(ColorTemperature::new(2000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature (warmest).
    pub const MIN: u16 = 2700;

    /// Maximum color temperature (coolest).
    pub const MAX: u16 = 6500;

    /// Warm white.
    pub const WARM: Self = Self(2700);

    /// Neutral white.
    pub const NEUTRAL: Self = Self(4000);

    /// Cool daylight.
    pub const COOL: Self = Self(6500);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [2700, 6500].
    pub fn new(kelvin: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&kelvin) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: kelvin,
            });
        }
        Ok(Self(kelvin))
    }

    /// Returns the color temperature in Kelvin.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the wire encoding: high byte first.
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for ColorTemperature {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl TryFrom<u16> for ColorTemperature {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
