// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection management for the lamp.
//!
//! The [`DeviceManager`] owns the single HID handle. It opens the device
//! lazily, keeps it open across batches and reconnects after failures
//! according to its [`RetryPolicy`].
//!
//! # Reconnection
//!
//! When any report of a batch fails, the handle is dropped, the manager
//! waits, releases the transport, waits again and resends the whole batch
//! from a fresh connection:
//!
//! ```text
//! attempt 1 ──fail──> sleep(retry_delay) ─> release ─> sleep(reopen_delay)
//! attempt 2 ──fail──> ...
//! attempt N ──fail──> Error::RetriesExhausted
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(feature = "hidapi")]
//! # async fn example() -> litra_lib::Result<()> {
//! use litra_lib::command;
//! use litra_lib::manager::{DeviceManager, ManagerConfig};
//! use litra_lib::transport::HidApiTransport;
//! use litra_lib::types::LightTarget;
//!
//! let manager = DeviceManager::new(HidApiTransport::new(), ManagerConfig::default());
//! manager
//!     .write_commands(&[command::power(LightTarget::Front, true)])
//!     .await?;
//! manager.close().await;
//! # Ok(())
//! # }
//! ```

mod config;
mod connection;
mod device_manager;

pub use config::{DeviceFilter, ManagerConfig, RetryPolicy};
pub use connection::ConnectionState;
pub use device_manager::DeviceManager;
