// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control reports.

use crate::types::LightTarget;

use super::{BACK_POWER_FUNCTION, Command, FRONT_POWER_FUNCTION};

/// Encodes an on/off report for one emitter.
///
/// The front light switches with function `0x1C`; the back light uses a
/// separate sub-feature with function `0x4B`.
///
/// # Examples
///
/// ```
/// use litra_lib::command::power;
/// use litra_lib::types::LightTarget;
///
/// let off = power(LightTarget::Back, false);
/// assert_eq!(&off.as_bytes()[..5], &[0x11, 0xFF, 0x0A, 0x4B, 0x00]);
/// ```
#[must_use]
pub fn power(target: LightTarget, on: bool) -> Command {
    let function = match target {
        LightTarget::Front => FRONT_POWER_FUNCTION,
        LightTarget::Back => BACK_POWER_FUNCTION,
    };
    Command::new(target.feature_id(), function, &[u8::from(on)])
}
