// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-key action state.
//!
//! A control surface binds each key to an action that remembers something
//! between presses: whether a light is on, which preset comes next, which
//! colors the back light showed before it was switched off. The types here
//! hold that memory. The caller owns one value per key; nothing is global.
//!
//! # Examples
//!
//! ```
//! use litra_lib::state::Cycle;
//!
//! let mut cycle = Cycle::brightness_levels();
//! assert_eq!(cycle.advance(), Some((&20, 1)));
//! assert_eq!(cycle.label(), "2/5");
//! ```

mod back_light;
mod cycle;
mod preset;

pub use back_light::{BackLightState, PowerToggle};
pub use cycle::Cycle;
pub use preset::{ColorPreset, PresetMode};
