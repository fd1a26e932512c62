// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The single open device handle owned by the manager.

use crate::command::Command;
use crate::error::{Error, Result};
use crate::transport::{ReportWriter, Transport};

use super::config::DeviceFilter;

/// Connection state of a [`DeviceManager`](super::DeviceManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// No handle is open. The next batch will connect.
    Disconnected,
    /// A handle is open on the interface at `path`.
    Connected {
        /// Platform path of the open interface.
        path: String,
    },
    /// The manager was closed and rejects further writes.
    Closed,
}

impl ConnectionState {
    /// Returns true if a handle is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Returns true if the manager was closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

struct OpenHandle<W> {
    path: String,
    writer: W,
}

/// Transport plus at most one open handle.
pub(crate) struct Connection<T: Transport> {
    transport: T,
    handle: Option<OpenHandle<T::Handle>>,
    closed: bool,
}

impl<T: Transport> Connection<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self {
            transport,
            handle: None,
            closed: false,
        }
    }

    pub(crate) fn state(&self) -> ConnectionState {
        match (&self.handle, self.closed) {
            (_, true) => ConnectionState::Closed,
            (Some(handle), false) => ConnectionState::Connected {
                path: handle.path.clone(),
            },
            (None, false) => ConnectionState::Disconnected,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Writes every report of the batch in order, connecting first if needed.
    ///
    /// A failed write drops the handle so the next attempt reconnects.
    pub(crate) fn write_batch(&mut self, filter: &DeviceFilter, commands: &[Command]) -> Result<()> {
        let handle = self.ensure_open(filter)?;
        let path = &handle.path;
        let writer = &mut handle.writer;

        let result = commands.iter().enumerate().try_for_each(|(index, command)| {
            tracing::trace!(path = %path, index, report = %command, "Writing report");
            writer.write_report(command.as_bytes())
        });

        if let Err(e) = result {
            self.drop_handle();
            return Err(e.into());
        }
        Ok(())
    }

    /// Drops the handle and releases the transport.
    pub(crate) fn release(&mut self) {
        self.drop_handle();
        self.transport.release();
    }

    /// Releases everything and rejects later writes.
    pub(crate) fn close(&mut self) {
        self.release();
        self.closed = true;
    }

    fn drop_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::info!(path = %handle.path, "Disconnected from Litra device");
        }
    }

    fn ensure_open(&mut self, filter: &DeviceFilter) -> Result<&mut OpenHandle<T::Handle>> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => match self.connect(filter) {
                Ok(handle) => handle,
                Err(e) => {
                    self.transport.release();
                    return Err(e);
                }
            },
        };
        Ok(self.handle.insert(handle))
    }

    fn connect(&mut self, filter: &DeviceFilter) -> Result<OpenHandle<T::Handle>> {
        self.transport.init()?;
        let devices = self
            .transport
            .enumerate(filter.vendor_id, filter.product_id)?;
        tracing::debug!(candidates = devices.len(), filter = %filter, "Enumerated HID interfaces");

        let info = devices
            .into_iter()
            .find(|d| filter.matches(d))
            .ok_or(Error::DeviceNotFound(*filter))?;

        let writer = self.transport.open(&info.path)?;
        tracing::info!(
            path = %info.path,
            interface = info.interface_number,
            "Connected to Litra device"
        );
        Ok(OpenHandle {
            path: info.path,
            writer,
        })
    }
}
