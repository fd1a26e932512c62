// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Back light zone addressing and gradients.

use std::fmt;

use crate::error::ValueError;

use super::RgbColor;

/// Index of one RGB segment of the back light strip (1-7).
///
/// # Examples
///
/// ```
/// use litra_lib::types::Zone;
///
/// let zone = Zone::new(3).unwrap();
/// assert_eq!(zone.value(), 3);
///
/// assert_eq!(Zone::all().count(), 7);
/// assert!(Zone::new(0).is_err());
/// assert!(Zone::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zone(u8);

impl Zone {
    /// Number of zones on the back light.
    pub const COUNT: u8 = 7;

    /// The first zone.
    pub const FIRST: Self = Self(1);

    /// The last zone.
    pub const LAST: Self = Self(Self::COUNT);

    /// Creates a new zone index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if index is outside [1, 7].
    pub fn new(index: u8) -> Result<Self, ValueError> {
        if !(1..=Self::COUNT).contains(&index) {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: u16::from(Self::COUNT),
                actual: u16::from(index),
            });
        }
        Ok(Self(index))
    }

    /// Returns the 1-based zone index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Iterates all zones in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(Self)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone {}", self.0)
    }
}

impl TryFrom<u8> for Zone {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A linear blend between two colors across the back light zones.
///
/// Zone 1 receives `start` exactly and zone 7 receives `end` exactly.
///
/// # Examples
///
/// ```
/// use litra_lib::types::{Gradient, RgbColor, Zone};
///
/// let gradient = Gradient::new(RgbColor::red_color(), RgbColor::blue_color());
/// let colors = gradient.zone_colors();
/// assert_eq!(colors[0], RgbColor::red_color());
/// assert_eq!(colors[6], RgbColor::blue_color());
/// assert_eq!(gradient.color_at(Zone::new(4).unwrap()), RgbColor::new(128, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    start: RgbColor,
    end: RgbColor,
}

impl Gradient {
    /// Creates a gradient from zone 1's color to zone 7's color.
    #[must_use]
    pub const fn new(start: RgbColor, end: RgbColor) -> Self {
        Self { start, end }
    }

    /// Returns the color of zone 1.
    #[must_use]
    pub const fn start(&self) -> RgbColor {
        self.start
    }

    /// Returns the color of zone 7.
    #[must_use]
    pub const fn end(&self) -> RgbColor {
        self.end
    }

    /// Returns the interpolated color of one zone.
    #[must_use]
    pub fn color_at(&self, zone: Zone) -> RgbColor {
        self.start.lerp(&self.end, zone.value() - 1, Zone::COUNT - 1)
    }

    /// Returns the colors of zones 1 through 7.
    #[must_use]
    pub fn zone_colors(&self) -> [RgbColor; Zone::COUNT as usize] {
        let mut colors = [self.start; Zone::COUNT as usize];
        for (slot, zone) in colors.iter_mut().zip(Zone::all()) {
            *slot = self.color_at(zone);
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_range() {
        for v in 1..=7 {
            assert_eq!(Zone::new(v).unwrap().value(), v);
        }
        assert!(Zone::new(0).is_err());
        assert!(Zone::new(8).is_err());
    }

    #[test]
    fn zones_ascend() {
        let zones: Vec<u8> = Zone::all().map(|z| z.value()).collect();
        assert_eq!(zones, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn gradient_endpoints_exact() {
        let a = RgbColor::new(3, 100, 250);
        let b = RgbColor::new(200, 7, 9);
        let colors = Gradient::new(a, b).zone_colors();
        assert_eq!(colors[0], a);
        assert_eq!(colors[6], b);
    }

    #[test]
    fn gradient_channels_monotonic() {
        let a = RgbColor::new(0, 10, 90);
        let b = RgbColor::new(255, 11, 200);
        let colors = Gradient::new(a, b).zone_colors();
        for pair in colors.windows(2) {
            assert!(pair[0].red() <= pair[1].red());
            assert!(pair[0].green() <= pair[1].green());
            assert!(pair[0].blue() <= pair[1].blue());
        }
    }

    #[test]
    fn gradient_same_color_is_flat() {
        let c = RgbColor::new(40, 50, 60);
        assert!(Gradient::new(c, c).zone_colors().iter().all(|z| *z == c));
    }
}
