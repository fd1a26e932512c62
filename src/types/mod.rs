// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Litra lamp control.
//!
//! This module provides type-safe representations of values used in lamp
//! commands. Each type ensures values are within their valid ranges at
//! construction time, so encoding a report never clamps silently.
//!
//! # Types
//!
//! - [`LightTarget`] - Front or back emitter
//! - [`Brightness`] - Brightness level (1-100%)
//! - [`ColorTemperature`] - Front light color temperature (2700-6500K)
//! - [`RgbColor`] - Back light color with hex parsing
//! - [`Zone`] - Back light segment index (1-7)
//! - [`Gradient`] - Two-color blend across the zones

mod brightness;
mod rgb_color;
mod target;
mod temperature;
mod zone;

pub use brightness::{Brightness, FRONT_BRIGHTNESS_MAX_BYTE, FRONT_BRIGHTNESS_MIN_BYTE};
pub use rgb_color::{MIN_CHANNEL_VALUE, RgbColor};
pub use target::{BACK_COLOR_FEATURE_ID, BACK_FEATURE_ID, FRONT_FEATURE_ID, LightTarget};
pub use temperature::ColorTemperature;
pub use zone::{Gradient, Zone};
