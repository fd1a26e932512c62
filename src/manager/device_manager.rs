// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized, retrying access to one lamp.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::command::Command;
use crate::error::{Error, Result};
use crate::transport::{DeviceInfo, Transport};

use super::config::ManagerConfig;
use super::connection::{Connection, ConnectionState};

/// Owns the device handle and writes report batches to it.
///
/// Batches never interleave: the internal lock is held from the first
/// report of a batch until its last one is written or its retry budget is
/// spent, retry sleeps included. A failed batch is resent from its first
/// report on a fresh connection.
///
/// Transport calls block, so each attempt runs on tokio's blocking pool
/// with the lock handed to it and back.
///
/// # Examples
///
/// ```
/// use litra_lib::command;
/// use litra_lib::manager::{DeviceManager, ManagerConfig, RetryPolicy};
/// use litra_lib::transport::MockTransport;
/// use litra_lib::types::LightTarget;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> litra_lib::Result<()> {
/// let mock = MockTransport::litra();
/// let config = ManagerConfig::new().with_retry(RetryPolicy::immediate());
/// let manager = DeviceManager::new(mock.clone(), config);
///
/// manager
///     .write_commands(&[command::power(LightTarget::Front, true)])
///     .await?;
/// assert_eq!(mock.written().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct DeviceManager<T: Transport> {
    config: ManagerConfig,
    connection: Arc<Mutex<Connection<T>>>,
}

type ConnectionGuard<T> = OwnedMutexGuard<Connection<T>>;

/// Runs blocking transport work off the async workers, keeping the lock.
async fn blocking<T, R, F>(
    mut guard: ConnectionGuard<T>,
    work: F,
) -> Result<(ConnectionGuard<T>, R)>
where
    T: Transport,
    F: FnOnce(&mut Connection<T>) -> R + Send + 'static,
    R: Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || {
        let out = work(&mut guard);
        (guard, out)
    })
    .await?;
    Ok(result)
}

impl<T: Transport> DeviceManager<T> {
    /// Creates a manager. No device is opened until the first batch.
    #[must_use]
    pub fn new(transport: T, config: ManagerConfig) -> Self {
        Self {
            config,
            connection: Arc::new(Mutex::new(Connection::new(transport))),
        }
    }

    /// Creates a manager for the Litra Beam LX with the default retry policy.
    #[must_use]
    pub fn with_defaults(transport: T) -> Self {
        Self::new(transport, ManagerConfig::default())
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Writes a batch of reports in order.
    ///
    /// An empty batch succeeds without touching the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] after [`close`](Self::close), and
    /// [`Error::RetriesExhausted`] once every attempt of the retry budget
    /// has failed. [`Error::Task`] means a transport call panicked.
    pub async fn write_commands(&self, commands: &[Command]) -> Result<()> {
        let mut connection = Arc::clone(&self.connection).lock_owned().await;
        if connection.is_closed() {
            return Err(Error::Closed);
        }
        if commands.is_empty() {
            return Ok(());
        }

        let policy = self.config.retry;
        let filter = self.config.filter;
        let max_attempts = policy.max_attempts();
        let batch: Arc<[Command]> = Arc::from(commands);
        tracing::debug!(reports = batch.len(), "Writing report batch");

        let mut attempt = 1;
        loop {
            let reports = Arc::clone(&batch);
            let (guard, result) =
                blocking(connection, move |conn| conn.write_batch(&filter, &reports)).await?;
            connection = guard;

            let err = match result {
                Ok(()) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "Report batch written after retry");
                    }
                    return Ok(());
                }
                Err(e) => e,
            };

            if !err.is_retryable() {
                return Err(err);
            }

            tracing::warn!(attempt, max_attempts, error = %err, "Report batch attempt failed");
            if attempt >= max_attempts {
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(err),
                });
            }
            attempt += 1;

            tokio::time::sleep(policy.retry_delay).await;
            connection = blocking(connection, Connection::release).await?.0;
            tokio::time::sleep(policy.reopen_delay).await;
        }
    }

    /// Lists every interface with the configured vendor and product ids,
    /// whatever their usage page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] after close, or the transport failure.
    pub async fn list_interfaces(&self) -> Result<Vec<DeviceInfo>> {
        let connection = Arc::clone(&self.connection).lock_owned().await;
        if connection.is_closed() {
            return Err(Error::Closed);
        }
        let filter = self.config.filter;
        let (_, listed) = blocking(connection, move |conn| {
            let transport = conn.transport_mut();
            transport.init()?;
            transport.enumerate(filter.vendor_id, filter.product_id)
        })
        .await?;
        Ok(listed?)
    }

    /// Closes the handle and releases the transport.
    ///
    /// Waits for an in-flight batch to finish. Later batches fail with
    /// [`Error::Closed`]. Closing twice is a no-op.
    pub async fn close(&self) {
        let connection = Arc::clone(&self.connection).lock_owned().await;
        if connection.is_closed() {
            return;
        }
        if let Err(e) = blocking(connection, Connection::close).await {
            tracing::warn!(error = %e, "Releasing transport on close failed");
            return;
        }
        tracing::info!("Device manager closed");
    }

    /// Returns the current connection state.
    pub async fn state(&self) -> ConnectionState {
        self.connection.lock().await.state()
    }
}

impl<T: Transport> std::fmt::Debug for DeviceManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::command;
    use crate::manager::RetryPolicy;
    use crate::transport::MockTransport;
    use crate::types::LightTarget;

    fn manager(mock: &MockTransport) -> DeviceManager<MockTransport> {
        DeviceManager::new(
            mock.clone(),
            ManagerConfig::new().with_retry(RetryPolicy::immediate()),
        )
    }

    #[tokio::test]
    async fn empty_batch_does_no_io() {
        let mock = MockTransport::litra();
        manager(&mock).write_commands(&[]).await.unwrap();
        assert_eq!(mock.init_calls(), 0);
        assert_eq!(mock.open_calls(), 0);
    }

    #[tokio::test]
    async fn list_interfaces_ignores_usage_page() {
        let mock = MockTransport::litra();
        let interfaces = manager(&mock).list_interfaces().await.unwrap();
        assert_eq!(interfaces.len(), 2);
    }

    #[tokio::test]
    async fn state_follows_connection() {
        let mock = MockTransport::litra();
        let manager = manager(&mock);
        assert_eq!(manager.state().await, ConnectionState::Disconnected);

        manager
            .write_commands(&[command::power(LightTarget::Back, true)])
            .await
            .unwrap();
        assert!(manager.state().await.is_connected());

        manager.close().await;
        assert_eq!(manager.state().await, ConnectionState::Closed);
    }

    #[tokio::test]
    async fn slow_write_leaves_runtime_free() {
        let mock = MockTransport::litra();
        mock.set_write_latency(Duration::from_millis(300));
        let manager = Arc::new(manager(&mock));

        let writer = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.write_commands(&[command::color_commit()]).await })
        };

        // Single-threaded runtime: an inline write would stall this timer too
        let start = std::time::Instant::now();
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() < Duration::from_millis(200), "{:?}", start.elapsed());

        writer.await.unwrap().unwrap();
        assert_eq!(mock.written(), vec![command::color_commit()]);
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let mock = MockTransport::litra();
        let manager = manager(&mock);
        manager.close().await;
        manager.close().await;
        assert_eq!(mock.release_calls(), 1);
        assert!(matches!(manager.list_interfaces().await, Err(Error::Closed)));
    }
}
