// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Litra HID report encoding.
//!
//! This module turns semantic lamp operations into the fixed-size reports
//! the lamp understands. Everything here is pure: no I/O, no retries, only
//! bytes or a [`ValueError`](crate::error::ValueError).
//!
//! # Report Layout
//!
//! | Offset | Field | Notes |
//! |--------|-------|-------|
//! | 0-1 | prefix | always `11 FF` |
//! | 2 | feature id | `06` front, `0A` back power/brightness, `0C` back zones |
//! | 3 | function id | operation, see the `*_FUNCTION` constants |
//! | 4-19 | payload | zero padded |
//!
//! # Available Encoders
//!
//! | Function | Reports | Targets |
//! |----------|---------|---------|
//! | [`power`] | 1 | front, back |
//! | [`brightness`] | 1 | front, back |
//! | [`temperature`] | 1 | front |
//! | [`color_zone`] | 1 | back |
//! | [`color_commit`] | 1 | back |
//! | [`solid_color`] | 8 | back |
//! | [`gradient`] | 8 | back |
//!
//! # Examples
//!
//! ```
//! use litra_lib::command;
//! use litra_lib::types::LightTarget;
//!
//! let on = command::power(LightTarget::Front, true);
//! assert_eq!(&on.as_bytes()[..5], &[0x11, 0xFF, 0x06, 0x1C, 0x01]);
//!
//! let level = command::brightness(LightTarget::Front, 100).unwrap();
//! assert_eq!(level.payload()[1], 250);
//!
//! assert!(command::temperature(LightTarget::Back, 4000).is_err());
//! ```

mod color;
mod light;
mod power;

use std::fmt;

pub(crate) use color::back_solid_color;
pub use color::{ZONE_BATCH_LEN, ZoneBatch, color_commit, color_zone, gradient, solid_color};
pub use light::{brightness, temperature};
pub use power::power;

/// Every report is exactly this many bytes long.
pub const REPORT_LENGTH: usize = 20;

/// Constant bytes that open every report.
pub const REPORT_PREFIX: [u8; 2] = [0x11, 0xFF];

/// Number of payload bytes after the header.
pub const PAYLOAD_LENGTH: usize = REPORT_LENGTH - 4;

/// Front light on/off.
pub const FRONT_POWER_FUNCTION: u8 = 0x1C;

/// Back light on/off. A different sub-feature than the front light's power.
pub const BACK_POWER_FUNCTION: u8 = 0x4B;

/// Front light brightness, mapped to the 20-250 byte range.
pub const FRONT_BRIGHTNESS_FUNCTION: u8 = 0x4C;

/// Back light brightness, raw percentage.
pub const BACK_BRIGHTNESS_FUNCTION: u8 = 0x2B;

/// Front light color temperature.
pub const TEMPERATURE_FUNCTION: u8 = 0x9C;

/// Set one back light zone's color.
pub const ZONE_COLOR_FUNCTION: u8 = 0x1B;

/// Apply all pending zone colors.
pub const COLOR_COMMIT_FUNCTION: u8 = 0x7B;

/// A single 20-byte HID output report.
///
/// Commands carry no identity beyond their bytes. They are built per user
/// action by the encoder functions in this module and handed to the
/// [`DeviceManager`](crate::manager::DeviceManager) in batches.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command([u8; REPORT_LENGTH]);

impl Command {
    /// Builds a report from its header fields and payload.
    ///
    /// Payload bytes past [`PAYLOAD_LENGTH`] are dropped; the remainder is
    /// zero padded.
    pub(crate) fn new(feature_id: u8, function_id: u8, payload: &[u8]) -> Self {
        let mut bytes = [0u8; REPORT_LENGTH];
        bytes[..2].copy_from_slice(&REPORT_PREFIX);
        bytes[2] = feature_id;
        bytes[3] = function_id;
        let len = payload.len().min(PAYLOAD_LENGTH);
        bytes[4..4 + len].copy_from_slice(&payload[..len]);
        Self(bytes)
    }

    /// Wraps raw report bytes, for probing reports the encoder does not cover.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; REPORT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the full report.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; REPORT_LENGTH] {
        &self.0
    }

    /// Returns the feature id (byte 2).
    #[must_use]
    pub const fn feature_id(&self) -> u8 {
        self.0[2]
    }

    /// Returns the function id (byte 3).
    #[must_use]
    pub const fn function_id(&self) -> u8 {
        self.0[3]
    }

    /// Returns the payload bytes (4-19).
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.0[4..]
    }
}

impl AsRef<[u8]> for Command {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command({self})")
    }
}
