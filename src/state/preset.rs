// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Saved back light looks.

use serde::{Deserialize, Serialize};

use crate::command::{self, ZoneBatch};
use crate::types::RgbColor;

/// How a [`ColorPreset`] fills the zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetMode {
    /// Every zone shows `color`.
    #[default]
    Solid,
    /// Zones blend from `color` to `color2`.
    Gradient,
}

/// A solid color or two-color gradient for the back light.
///
/// `color2` is ignored in solid mode and defaults to white when absent.
///
/// # Examples
///
/// ```
/// use litra_lib::state::{ColorPreset, PresetMode};
/// use litra_lib::types::RgbColor;
///
/// let preset: ColorPreset =
///     serde_json::from_str(r##"{"mode": "gradient", "color": "#FF0000", "color2": "#0000FF"}"##)
///         .unwrap();
/// assert_eq!(preset.mode, PresetMode::Gradient);
/// assert_eq!(preset.commands().len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPreset {
    /// Fill mode.
    #[serde(default)]
    pub mode: PresetMode,
    /// Solid color, or the gradient's zone 1 color.
    pub color: RgbColor,
    /// The gradient's zone 7 color.
    #[serde(default)]
    pub color2: RgbColor,
}

impl ColorPreset {
    /// A single color on every zone.
    #[must_use]
    pub fn solid(color: RgbColor) -> Self {
        Self {
            mode: PresetMode::Solid,
            color,
            color2: RgbColor::default(),
        }
    }

    /// A blend from `start` on zone 1 to `end` on zone 7.
    #[must_use]
    pub fn gradient(start: RgbColor, end: RgbColor) -> Self {
        Self {
            mode: PresetMode::Gradient,
            color: start,
            color2: end,
        }
    }

    /// Encodes the zone batch for this preset, commit included.
    #[must_use]
    pub fn commands(&self) -> ZoneBatch {
        match self.mode {
            PresetMode::Solid => command::back_solid_color(self.color),
            PresetMode::Gradient => command::gradient(self.color, self.color2),
        }
    }
}
