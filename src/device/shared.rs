// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process-wide lamp instance.

use std::sync::OnceLock;

use crate::manager::ManagerConfig;
use crate::transport::HidApiTransport;

use super::Device;

static SHARED: OnceLock<Device<HidApiTransport>> = OnceLock::new();

/// Returns the process-wide lamp, creating it on first use.
///
/// The device is opened lazily by the first write, with the default
/// filter and retry policy. Pair it with
/// [`spawn_shutdown_hook`](crate::shutdown::spawn_shutdown_hook) so the
/// lights go off when the process is terminated.
///
/// ```no_run
/// # async fn example() -> litra_lib::Result<()> {
/// use litra_lib::device;
/// use litra_lib::shutdown::spawn_shutdown_hook;
///
/// let lamp = device::shared();
/// spawn_shutdown_hook(lamp);
/// lamp.set_front(60, 4000).await?;
/// # Ok(())
/// # }
/// ```
pub fn shared() -> &'static Device<HidApiTransport> {
    SHARED.get_or_init(|| {
        tracing::debug!("Creating shared Litra device");
        Device::from_transport(HidApiTransport::new(), ManagerConfig::default())
    })
}
