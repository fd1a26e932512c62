// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power toggles and back light color memory.

use crate::command::{self, Command, ZoneBatch};
use crate::types::LightTarget;

/// On/off memory for one power key.
///
/// The lamp cannot be queried, so this tracks what the key last sent. It
/// starts off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerToggle {
    on: bool,
}

impl PowerToggle {
    /// Creates a toggle in the given state.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    /// Returns true if the last press switched the light on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Flips the state and returns the power report for `target`.
    pub fn toggle_command(&mut self, target: LightTarget) -> Command {
        command::power(target, self.toggle())
    }
}

/// Back light power plus the colors it last showed.
///
/// Switching the back light off and on again loses its colors on the lamp
/// side. Record each color batch with [`remember`](Self::remember) and
/// [`toggle_commands`](Self::toggle_commands) replays it on power-on.
///
/// # Examples
///
/// ```
/// use litra_lib::command;
/// use litra_lib::state::BackLightState;
/// use litra_lib::types::{LightTarget, RgbColor};
///
/// let mut back = BackLightState::new();
/// back.remember(command::gradient(RgbColor::red_color(), RgbColor::blue_color()));
/// assert!(back.is_on());
///
/// let off = back.toggle_commands();
/// assert_eq!(off, vec![command::power(LightTarget::Back, false)]);
///
/// let on = back.toggle_commands();
/// assert_eq!(on.len(), 9);
/// assert_eq!(on[0], command::power(LightTarget::Back, true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackLightState {
    power: PowerToggle,
    last_colors: Option<ZoneBatch>,
}

impl BackLightState {
    /// Creates a state with the light off and no remembered colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the last toggle switched the light on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Records the last color batch written to the back light.
    ///
    /// Writing colors also switches the light on, so the toggle follows.
    pub fn remember(&mut self, colors: ZoneBatch) {
        self.last_colors = Some(colors);
        self.power = PowerToggle::new(true);
    }

    /// Returns the remembered color batch.
    #[must_use]
    pub fn last_colors(&self) -> Option<&ZoneBatch> {
        self.last_colors.as_ref()
    }

    /// Flips the power state and returns the batch to write.
    ///
    /// Power-on is followed by the remembered colors, if any. Power-off is a
    /// single report.
    pub fn toggle_commands(&mut self) -> Vec<Command> {
        let on = self.power.toggle();
        let mut batch = vec![command::power(LightTarget::Back, on)];
        if on && let Some(colors) = &self.last_colors {
            batch.extend_from_slice(colors);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RgbColor;

    #[test]
    fn toggle_starts_off() {
        let mut toggle = PowerToggle::default();
        assert!(!toggle.is_on());
        assert!(toggle.toggle());
        assert!(!toggle.toggle());
    }

    #[test]
    fn toggle_command_follows_state() {
        let mut toggle = PowerToggle::new(true);
        assert_eq!(
            toggle.toggle_command(LightTarget::Front),
            command::power(LightTarget::Front, false)
        );
    }

    #[test]
    fn power_on_without_colors_is_one_report() {
        let mut back = BackLightState::new();
        assert_eq!(
            back.toggle_commands(),
            vec![command::power(LightTarget::Back, true)]
        );
    }

    #[test]
    fn remember_marks_light_on() {
        let mut back = BackLightState::new();
        let colors = command::solid_color(LightTarget::Back, RgbColor::white()).unwrap();
        back.remember(colors);
        assert!(back.is_on());

        assert_eq!(back.toggle_commands().len(), 1);
        let restored = back.toggle_commands();
        assert_eq!(&restored[1..], &colors[..]);
    }
}
