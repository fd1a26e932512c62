// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness and color temperature reports.

use crate::error::ValueError;
use crate::types::{Brightness, ColorTemperature, LightTarget};

use super::{BACK_BRIGHTNESS_FUNCTION, Command, FRONT_BRIGHTNESS_FUNCTION, TEMPERATURE_FUNCTION};

/// Encodes a brightness report.
///
/// The front light expects the percentage mapped onto bytes 20-250. The back
/// light takes the raw percentage on its own function id. Both encodings are
/// fixed by the hardware.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `percent` is outside [1, 100].
///
/// # Examples
///
/// ```
/// use litra_lib::command::brightness;
/// use litra_lib::types::LightTarget;
///
/// let front = brightness(LightTarget::Front, 1).unwrap();
/// assert_eq!(&front.as_bytes()[2..6], &[0x06, 0x4C, 0x00, 20]);
///
/// let back = brightness(LightTarget::Back, 60).unwrap();
/// assert_eq!(&back.as_bytes()[2..6], &[0x0A, 0x2B, 0x00, 60]);
///
/// assert!(brightness(LightTarget::Front, 0).is_err());
/// ```
pub fn brightness(target: LightTarget, percent: u8) -> Result<Command, ValueError> {
    let level = Brightness::new(percent)?;
    let command = match target {
        LightTarget::Front => Command::new(
            target.feature_id(),
            FRONT_BRIGHTNESS_FUNCTION,
            &[0x00, level.front_byte()],
        ),
        LightTarget::Back => Command::new(
            target.feature_id(),
            BACK_BRIGHTNESS_FUNCTION,
            &[0x00, level.value()],
        ),
    };
    Ok(command)
}

/// Encodes a color temperature report for the front light.
///
/// # Errors
///
/// Returns `ValueError::UnsupportedTarget` for the back light and
/// `ValueError::OutOfRange` if `kelvin` is outside [2700, 6500].
pub fn temperature(target: LightTarget, kelvin: u16) -> Result<Command, ValueError> {
    if !target.supports_temperature() {
        return Err(ValueError::UnsupportedTarget {
            target,
            operation: "color temperature",
        });
    }
    let value = ColorTemperature::new(kelvin)?;
    Ok(Command::new(
        target.feature_id(),
        TEMPERATURE_FUNCTION,
        &value.to_be_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_byte(percent: u8) -> u8 {
        brightness(LightTarget::Front, percent).unwrap().payload()[1]
    }

    #[test]
    fn front_brightness_mapping() {
        assert_eq!(front_byte(1), 20);
        assert_eq!(front_byte(50), 134);
        assert_eq!(front_byte(100), 250);
    }

    #[test]
    fn front_brightness_monotonic() {
        let mut previous = 0;
        for percent in 1..=100 {
            let byte = front_byte(percent);
            assert!(byte > previous, "{percent}% encoded as {byte}");
            previous = byte;
        }
    }

    #[test]
    fn back_brightness_is_unmapped() {
        for percent in [1, 20, 50, 100] {
            let cmd = brightness(LightTarget::Back, percent).unwrap();
            assert_eq!(cmd.function_id(), 0x2B);
            assert_eq!(&cmd.payload()[..2], &[0x00, percent]);
        }
    }

    #[test]
    fn brightness_out_of_range_is_rejected() {
        for target in LightTarget::ALL {
            for percent in [0, 101, 200, 255] {
                assert!(matches!(
                    brightness(target, percent),
                    Err(ValueError::OutOfRange { min: 1, max: 100, .. })
                ));
            }
        }
    }

    #[test]
    fn temperature_big_endian() {
        let cmd = temperature(LightTarget::Front, 3200).unwrap();
        assert_eq!(&cmd.as_bytes()[..6], &[0x11, 0xFF, 0x06, 0x9C, 0x0C, 0x80]);
        assert!(cmd.payload()[2..].iter().all(|b| *b == 0));
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        for kelvin in [0, 2699, 6501, u16::MAX] {
            assert!(matches!(
                temperature(LightTarget::Front, kelvin),
                Err(ValueError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn temperature_on_back_is_unsupported() {
        assert_eq!(
            temperature(LightTarget::Back, 4000),
            Err(ValueError::UnsupportedTarget {
                target: LightTarget::Back,
                operation: "color temperature",
            })
        );
    }
}
