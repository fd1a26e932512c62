// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset cycling.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::RgbColor;

/// A list of presets stepped through one press at a time.
///
/// The index always points at the preset the next [`advance`](Self::advance)
/// returns. An index past the end, as found in stale settings, is reduced
/// modulo the list length.
///
/// Serialized as `{"presets": [...], "cycleIndex": n}`. The key
/// `colorPresets` is accepted for `presets` too.
///
/// # Examples
///
/// ```
/// use litra_lib::state::Cycle;
///
/// let mut temps = Cycle::front_temperatures();
/// assert_eq!(temps.advance(), Some((&2700, 1)));
/// assert_eq!(temps.advance(), Some((&3200, 2)));
///
/// let parsed: Cycle<u16> = Cycle::from_json(r#"{"presets": [3000, 5000], "cycleIndex": 3}"#).unwrap();
/// assert_eq!(parsed.current(), Some(&5000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle<T> {
    #[serde(alias = "colorPresets", default = "Vec::new")]
    presets: Vec<T>,
    #[serde(default)]
    cycle_index: usize,
}

impl<T> Cycle<T> {
    /// Creates a cycle starting at the first preset.
    #[must_use]
    pub fn new(presets: Vec<T>) -> Self {
        Self {
            presets,
            cycle_index: 0,
        }
    }

    /// Returns the presets.
    #[must_use]
    pub fn presets(&self) -> &[T] {
        &self.presets
    }

    /// Returns true if there are no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Returns the preset the next `advance` will return.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.position().map(|i| &self.presets[i])
    }

    /// Returns the current preset with its 1-based position, then moves on.
    ///
    /// Wraps around after the last preset. Returns `None` if the list is
    /// empty.
    pub fn advance(&mut self) -> Option<(&T, usize)> {
        let index = self.position()?;
        self.cycle_index = (index + 1) % self.presets.len();
        Some((&self.presets[index], index + 1))
    }

    /// Position label of the next preset, such as `"2/5"`.
    ///
    /// Empty cycles read `"0/0"`.
    #[must_use]
    pub fn label(&self) -> String {
        let next = self.position().map_or(0, |i| i + 1);
        format!("{next}/{}", self.presets.len())
    }

    /// Replaces an empty preset list with `defaults`.
    #[must_use]
    pub fn or_defaults(self, defaults: Self) -> Self {
        if self.presets.is_empty() {
            defaults
        } else {
            self
        }
    }

    fn position(&self) -> Option<usize> {
        if self.presets.is_empty() {
            None
        } else {
            Some(self.cycle_index % self.presets.len())
        }
    }
}

impl<T: DeserializeOwned> Cycle<T> {
    /// Parses a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`](crate::Error::Settings) if the JSON is
    /// malformed or a preset does not parse.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> Default for Cycle<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Cycle<u16> {
    /// Front light color temperatures in kelvin.
    #[must_use]
    pub fn front_temperatures() -> Self {
        Self::new(vec![2700, 3200, 4000, 5000, 6500])
    }
}

impl Cycle<u8> {
    /// Brightness percentages for either light.
    #[must_use]
    pub fn brightness_levels() -> Self {
        Self::new(vec![20, 40, 60, 80, 100])
    }
}

impl Cycle<RgbColor> {
    /// Primary and secondary colors for the back light.
    #[must_use]
    pub fn solid_colors() -> Self {
        Self::new(vec![
            RgbColor::red_color(),
            RgbColor::green_color(),
            RgbColor::blue_color(),
            RgbColor::new(255, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(0, 255, 255),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn advance_wraps_around() {
        let mut cycle = Cycle::new(vec!['a', 'b', 'c']);
        let seen: Vec<(char, usize)> = (0..5)
            .map(|_| cycle.advance().map(|(c, i)| (*c, i)).unwrap())
            .collect();
        assert_eq!(seen, vec![('a', 1), ('b', 2), ('c', 3), ('a', 1), ('b', 2)]);
    }

    #[test]
    fn empty_cycle() {
        let mut cycle: Cycle<u8> = Cycle::default();
        assert_eq!(cycle.advance(), None);
        assert_eq!(cycle.label(), "0/0");
        assert_eq!(cycle.current(), None);
    }

    #[test]
    fn stale_index_is_reduced() {
        let mut cycle: Cycle<u8> = Cycle::from_json(r#"{"presets": [1, 2], "cycleIndex": 7}"#).unwrap();
        assert_eq!(cycle.label(), "2/2");
        assert_eq!(cycle.advance(), Some((&2, 2)));
        assert_eq!(cycle.label(), "1/2");
    }

    #[test]
    fn color_presets_from_settings() {
        let json = r##"{"colorPresets": ["#FF0000", "#00f"], "cycleIndex": 1}"##;
        let mut cycle: Cycle<RgbColor> = Cycle::from_json(json).unwrap();
        assert_eq!(cycle.advance(), Some((&RgbColor::blue_color(), 2)));
    }

    #[test]
    fn missing_presets_fall_back_to_defaults() {
        let cycle: Cycle<RgbColor> = Cycle::from_json("{}").unwrap();
        let cycle = cycle.or_defaults(Cycle::solid_colors());
        assert_eq!(cycle.presets().len(), 6);
    }

    #[test]
    fn bad_preset_is_a_settings_error() {
        let result: Result<Cycle<RgbColor>> = Cycle::from_json(r##"{"presets": ["#XYZ"]}"##);
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn serializes_with_camel_case_index() {
        let mut cycle = Cycle::brightness_levels();
        cycle.advance();
        let json = serde_json::to_value(&cycle).unwrap();
        assert_eq!(json["cycleIndex"], 1);
        assert_eq!(json["presets"][4], 100);
    }
}
