// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level lamp control.
//!
//! [`Device`] is what a control surface talks to. Each method validates its
//! arguments, encodes the report batch and hands it to the
//! [`DeviceManager`], which serializes and retries the write.
//!
//! # Examples
//!
//! ```
//! use litra_lib::Device;
//! use litra_lib::manager::{ManagerConfig, RetryPolicy};
//! use litra_lib::transport::MockTransport;
//! use litra_lib::types::{LightTarget, RgbColor};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> litra_lib::Result<()> {
//! let mock = MockTransport::litra();
//! let device = Device::from_transport(mock.clone(), ManagerConfig::default());
//!
//! device.power(LightTarget::Front, true).await?;
//! device.set_temperature(4000).await?;
//! device.set_gradient(RgbColor::red_color(), RgbColor::blue_color()).await?;
//!
//! device.shutdown().await;
//! assert_eq!(mock.open_handles(), 0);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "hidapi")]
mod shared;

#[cfg(feature = "hidapi")]
pub use shared::shared;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::command::{self, Command, ZoneBatch};
use crate::error::Result;
use crate::manager::{DeviceManager, ManagerConfig};
use crate::state::ColorPreset;
use crate::transport::Transport;
use crate::types::{LightTarget, RgbColor};

/// A Litra Beam LX reachable through a transport.
///
/// Invalid arguments fail with [`Error::Value`](crate::Error::Value) before
/// anything is written.
#[derive(Debug)]
pub struct Device<T: Transport> {
    manager: DeviceManager<T>,
    shut_down: AtomicBool,
}

impl<T: Transport> Device<T> {
    /// Wraps an existing manager.
    #[must_use]
    pub fn new(manager: DeviceManager<T>) -> Self {
        Self {
            manager,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Creates a device with its own manager.
    #[must_use]
    pub fn from_transport(transport: T, config: ManagerConfig) -> Self {
        Self::new(DeviceManager::new(transport, config))
    }

    /// Returns the connection manager.
    #[must_use]
    pub fn manager(&self) -> &DeviceManager<T> {
        &self.manager
    }

    // ========== Single operations ==========

    /// Switches one light on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn power(&self, target: LightTarget, on: bool) -> Result<()> {
        self.write_batch(&[command::power(target, on)]).await
    }

    /// Sets the brightness of one light, in percent.
    ///
    /// # Errors
    ///
    /// Returns error if `percent` is outside [1, 100] or the write fails.
    pub async fn set_brightness(&self, target: LightTarget, percent: u8) -> Result<()> {
        let cmd = command::brightness(target, percent)?;
        self.write_batch(&[cmd]).await
    }

    /// Sets the front light color temperature, in kelvin.
    ///
    /// # Errors
    ///
    /// Returns error if `kelvin` is outside [2700, 6500] or the write fails.
    pub async fn set_temperature(&self, kelvin: u16) -> Result<()> {
        let cmd = command::temperature(LightTarget::Front, kelvin)?;
        self.write_batch(&[cmd]).await
    }

    /// Paints every back light zone in one color.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_color(&self, color: RgbColor) -> Result<()> {
        self.write_batch(&command::back_solid_color(color)).await
    }

    /// Blends the back light from `start` on zone 1 to `end` on zone 7.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_gradient(&self, start: RgbColor, end: RgbColor) -> Result<()> {
        self.write_batch(&command::gradient(start, end)).await
    }

    /// Switches both lights off in one batch, front first.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn power_off_all(&self) -> Result<()> {
        self.write_batch(&[
            command::power(LightTarget::Front, false),
            command::power(LightTarget::Back, false),
        ])
        .await
    }

    // ========== Composite batches ==========

    /// Switches the front light on at the given brightness and temperature.
    ///
    /// Both values are validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns error if either value is out of range or the write fails.
    pub async fn set_front(&self, percent: u8, kelvin: u16) -> Result<()> {
        let batch = [
            command::power(LightTarget::Front, true),
            command::brightness(LightTarget::Front, percent)?,
            command::temperature(LightTarget::Front, kelvin)?,
        ];
        self.write_batch(&batch).await
    }

    /// Switches the back light on and paints it in one color.
    ///
    /// Returns the color batch, for
    /// [`BackLightState::remember`](crate::state::BackLightState::remember).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn apply_color(&self, color: RgbColor) -> Result<ZoneBatch> {
        self.apply_back(command::back_solid_color(color)).await
    }

    /// Switches the back light on and applies a preset.
    ///
    /// Returns the color batch, like [`apply_color`](Self::apply_color).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn apply_preset(&self, preset: &ColorPreset) -> Result<ZoneBatch> {
        self.apply_back(preset.commands()).await
    }

    /// Writes an already encoded batch.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn write_batch(&self, commands: &[Command]) -> Result<()> {
        self.manager.write_commands(commands).await
    }

    async fn apply_back(&self, colors: ZoneBatch) -> Result<ZoneBatch> {
        let mut batch = Vec::with_capacity(colors.len() + 1);
        batch.push(command::power(LightTarget::Back, true));
        batch.extend_from_slice(&colors);
        self.write_batch(&batch).await?;
        Ok(colors)
    }

    // ========== Lifecycle ==========

    /// Switches both lights off and closes the manager.
    ///
    /// Runs once; later calls return immediately. A failed power-off is
    /// logged and does not prevent the close.
    pub async fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::info!("Shutting down, switching lights off");
        if let Err(e) = self.power_off_all().await {
            tracing::warn!(error = %e, "Power-off during shutdown failed");
        }
        self.manager.close().await;
    }

    /// Returns true once [`shutdown`](Self::shutdown) has started.
    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}
