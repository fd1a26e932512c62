// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `litra_lib` - A Rust library to drive the Logitech Litra Beam LX.
//!
//! The lamp has a white front panel and a back bar of seven RGB zones. Both
//! are controlled through fixed-size output reports on a vendor HID
//! interface. This crate encodes those reports and keeps the connection to
//! the lamp alive across unplugs and transient HID errors.
//!
//! # Supported Features
//!
//! - **Power control**: front and back lights independently
//! - **Front light**: brightness and color temperature (2700-6500 K)
//! - **Back light**: brightness, solid colors, seven-zone gradients
//! - **Resilient writes**: serialized batches, reconnect and full-batch retry
//! - **Per-key state**: power toggles, preset cycles, color memory
//!
//! # Layers
//!
//! - [`command`]: pure report encoders, no I/O
//! - [`transport`]: HID access (`hidapi` feature) and an in-memory mock
//! - [`manager`]: the single connection, locking and retries
//! - [`Device`]: the semantic API on top
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "hidapi")]
//! # #[tokio::main]
//! # async fn main() -> litra_lib::Result<()> {
//! use litra_lib::device;
//! use litra_lib::shutdown::spawn_shutdown_hook;
//! use litra_lib::types::{LightTarget, RgbColor};
//!
//! let lamp = device::shared();
//! spawn_shutdown_hook(lamp);
//!
//! lamp.set_front(80, 4000).await?;
//! lamp.power(LightTarget::Back, true).await?;
//! lamp.set_gradient(RgbColor::red_color(), RgbColor::blue_color()).await?;
//!
//! lamp.shutdown().await;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "hidapi"))]
//! # fn main() {}
//! ```
//!
//! # Cargo Features
//!
//! - `hidapi`: native HID transport and the process-wide `device::shared()`
//!   instance. Off by default; it needs the platform HID libraries to build.

pub mod command;
pub mod device;
pub mod error;
pub mod manager;
pub mod shutdown;
pub mod state;
pub mod transport;
pub mod types;

pub use command::Command;
pub use device::Device;
pub use error::{Error, Result, TransportError, ValueError};
pub use manager::{ConnectionState, DeviceFilter, DeviceManager, ManagerConfig, RetryPolicy};
pub use types::{Brightness, ColorTemperature, Gradient, LightTarget, RgbColor, Zone};
