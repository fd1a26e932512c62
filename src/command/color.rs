// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Back light zone color reports.
//!
//! Zone writes are staged by the lamp and only take effect once a commit
//! report follows them. Batch builders here always emit zones 1 to 7 in
//! ascending order and put the commit last.

use crate::error::ValueError;
use crate::types::{BACK_COLOR_FEATURE_ID, Gradient, LightTarget, RgbColor, Zone};

use super::{COLOR_COMMIT_FUNCTION, Command, ZONE_COLOR_FUNCTION};

/// Reports in a full zone batch: one per zone plus the commit.
pub const ZONE_BATCH_LEN: usize = Zone::COUNT as usize + 1;

/// Seven zone reports followed by one commit.
pub type ZoneBatch = [Command; ZONE_BATCH_LEN];

/// Trailer written after each zone color. Meaning unknown, required as is.
const ZONE_TRAILER: [u8; 12] = [
    0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00,
];

/// Encodes the color of a single zone.
///
/// Channels equal to 0 are sent as 1. The lamp misbehaves on zero channels.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `zone` is outside [1, 7].
///
/// # Examples
///
/// ```
/// use litra_lib::command::color_zone;
/// use litra_lib::types::RgbColor;
///
/// let cmd = color_zone(2, RgbColor::new(255, 0, 64)).unwrap();
/// assert_eq!(&cmd.as_bytes()[..8], &[0x11, 0xFF, 0x0C, 0x1B, 2, 255, 1, 64]);
/// ```
pub fn color_zone(zone: u8, color: RgbColor) -> Result<Command, ValueError> {
    Ok(zone_command(Zone::new(zone)?, color))
}

/// Encodes the commit that applies all staged zone colors.
#[must_use]
pub fn color_commit() -> Command {
    Command::new(BACK_COLOR_FEATURE_ID, COLOR_COMMIT_FUNCTION, &[0x00, 0x00, 0x01])
}

/// Encodes one color on every zone of `target`, followed by the commit.
///
/// # Errors
///
/// Returns `ValueError::UnsupportedTarget` unless `target` is the back light.
///
/// # Examples
///
/// ```
/// use litra_lib::command::{color_commit, solid_color};
/// use litra_lib::types::{LightTarget, RgbColor};
///
/// let batch = solid_color(LightTarget::Back, RgbColor::blue_color()).unwrap();
/// assert_eq!(batch.len(), 8);
/// assert_eq!(batch[7], color_commit());
///
/// assert!(solid_color(LightTarget::Front, RgbColor::blue_color()).is_err());
/// ```
pub fn solid_color(target: LightTarget, color: RgbColor) -> Result<ZoneBatch, ValueError> {
    if !target.supports_color() {
        return Err(ValueError::UnsupportedTarget {
            target,
            operation: "RGB color",
        });
    }
    Ok(back_solid_color(color))
}

/// Solid color batch for the back light, which always supports color.
pub(crate) fn back_solid_color(color: RgbColor) -> ZoneBatch {
    zone_batch(|_| color)
}

/// Encodes a two-color blend across the back light, followed by the commit.
///
/// Zone 1 gets `start` and zone 7 gets `end`; zones in between are linearly
/// interpolated per channel.
#[must_use]
pub fn gradient(start: RgbColor, end: RgbColor) -> ZoneBatch {
    let gradient = Gradient::new(start, end);
    zone_batch(|zone| gradient.color_at(zone))
}

fn zone_command(zone: Zone, color: RgbColor) -> Command {
    let [r, g, b] = color.to_device();
    let mut payload = [0u8; 16];
    payload[..4].copy_from_slice(&[zone.value(), r, g, b]);
    payload[4..].copy_from_slice(&ZONE_TRAILER);
    Command::new(BACK_COLOR_FEATURE_ID, ZONE_COLOR_FUNCTION, &payload)
}

fn zone_batch(color_of: impl Fn(Zone) -> RgbColor) -> ZoneBatch {
    let mut batch = [color_commit(); ZONE_BATCH_LEN];
    for (slot, zone) in batch.iter_mut().zip(Zone::all()) {
        *slot = zone_command(zone, color_of(zone));
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_rgb(cmd: &Command) -> (u8, [u8; 3]) {
        let p = cmd.payload();
        (p[0], [p[1], p[2], p[3]])
    }

    #[test]
    fn zone_layout() {
        let cmd = color_zone(7, RgbColor::new(10, 20, 30)).unwrap();
        assert_eq!(
            cmd.as_bytes(),
            &[
                0x11, 0xFF, 0x0C, 0x1B, 7, 10, 20, 30, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0
            ]
        );
    }

    #[test]
    fn zero_channels_become_one() {
        let cmd = color_zone(1, RgbColor::new(0, 200, 0)).unwrap();
        assert_eq!(zone_rgb(&cmd), (1, [1, 200, 1]));

        let cmd = color_zone(1, RgbColor::new(0, 0, 0)).unwrap();
        assert_eq!(zone_rgb(&cmd), (1, [1, 1, 1]));
    }

    #[test]
    fn zone_out_of_range_is_rejected() {
        assert!(color_zone(0, RgbColor::white()).is_err());
        assert!(color_zone(8, RgbColor::white()).is_err());
    }

    #[test]
    fn commit_layout() {
        assert_eq!(
            &color_commit().as_bytes()[..9],
            &[0x11, 0xFF, 0x0C, 0x7B, 0x00, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn solid_color_order() {
        let color = RgbColor::new(12, 34, 56);
        let batch = solid_color(LightTarget::Back, color).unwrap();

        for (i, cmd) in batch[..7].iter().enumerate() {
            assert_eq!(cmd.function_id(), ZONE_COLOR_FUNCTION);
            assert_eq!(zone_rgb(cmd), (i as u8 + 1, [12, 34, 56]));
        }
        assert_eq!(batch[7], color_commit());
    }

    #[test]
    fn solid_color_on_front_is_unsupported() {
        assert!(matches!(
            solid_color(LightTarget::Front, RgbColor::white()),
            Err(ValueError::UnsupportedTarget {
                target: LightTarget::Front,
                ..
            })
        ));
    }

    #[test]
    fn gradient_endpoints_and_commit() {
        let batch = gradient(RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 255));
        assert_eq!(zone_rgb(&batch[0]), (1, [255, 1, 1]));
        assert_eq!(zone_rgb(&batch[3]), (4, [128, 1, 128]));
        assert_eq!(zone_rgb(&batch[6]), (7, [1, 1, 255]));
        assert_eq!(batch[7], color_commit());
    }

    #[test]
    fn gradient_monotonic_on_the_wire() {
        let batch = gradient(RgbColor::new(5, 40, 100), RgbColor::new(250, 41, 220));
        let colors: Vec<[u8; 3]> = batch[..7].iter().map(|c| zone_rgb(c).1).collect();
        for pair in colors.windows(2) {
            for channel in 0..3 {
                assert!(pair[0][channel] <= pair[1][channel]);
            }
        }
    }
}
