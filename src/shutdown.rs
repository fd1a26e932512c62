// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lights-off on process termination.

use std::ops::Deref;

use tokio::task::JoinHandle;

use crate::device::Device;
use crate::transport::Transport;

/// Completes when the process is asked to terminate.
///
/// Listens for Ctrl-C everywhere and for SIGTERM on unix. If a listener
/// cannot be installed it is skipped and the others still apply.
pub async fn termination_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}

/// Waits for `signal`, then shuts the device down.
///
/// [`spawn_shutdown_hook`] runs this with [`termination_signal`]. Hosts with
/// their own stop condition can pass any future instead.
pub async fn shutdown_on<T, F>(device: &Device<T>, signal: F)
where
    T: Transport,
    F: Future<Output = ()>,
{
    signal.await;
    device.shutdown().await;
}

/// Spawns a task that shuts the device down on the first termination
/// signal and then exits the process with status 0.
///
/// Listening for Ctrl-C or SIGTERM replaces their default action, so the
/// hook ends the process itself once the lights are off.
///
/// Accepts anything that dereferences to a [`Device`]: an `Arc<Device<_>>`
/// or the `&'static` reference from `device::shared()`. The shutdown runs at
/// most once, so the host may still call [`Device::shutdown`] on a normal
/// exit.
///
/// Must be called from within a tokio runtime.
pub fn spawn_shutdown_hook<T, D>(device: D) -> JoinHandle<()>
where
    T: Transport,
    D: Deref<Target = Device<T>> + Send + Sync + 'static,
{
    tokio::spawn(async move {
        shutdown_on(&*device, termination_signal()).await;
        tracing::info!("Exiting after shutdown");
        std::process::exit(0);
    })
}
