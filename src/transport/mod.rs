// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device access backends.
//!
//! A [`Transport`] is the one capability the connection manager needs from
//! the platform: bring up the HID subsystem, list interfaces, open one by
//! path and release everything again. Reports are written through the
//! [`ReportWriter`] it hands back.
//!
//! # Backends
//!
//! - [`HidApiTransport`]: native HID through the `hidapi` crate (feature
//!   `hidapi`)
//! - [`MockTransport`]: in-memory lamp with failure injection, for tests
//!
//! Calls are synchronous and may block. The manager runs them on tokio's
//! blocking pool while it holds its lock, so a stalled device never pins an
//! async worker.

#[cfg(feature = "hidapi")]
mod hid;
mod mock;

#[cfg(feature = "hidapi")]
pub use hid::{HidApiTransport, HidReportWriter};
pub use mock::{MOCK_DECOY_PATH, MOCK_LITRA_PATH, MockHandle, MockTransport};

use crate::error::TransportError;

/// One HID interface reported by enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Platform path used to open the interface.
    pub path: String,
    /// USB vendor id.
    pub vendor_id: u16,
    /// USB product id.
    pub product_id: u16,
    /// HID usage page of this interface.
    pub usage_page: u16,
    /// USB interface number, `-1` when the platform does not report it.
    pub interface_number: i32,
    /// Product string, if the device reports one.
    pub product: Option<String>,
}

/// Platform access to HID devices.
///
/// `release` must be idempotent: the manager calls it before every retry
/// and again on close.
pub trait Transport: Send + 'static {
    /// The open handle type.
    type Handle: ReportWriter;

    /// Initializes the HID subsystem. Called before every enumeration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the subsystem is unavailable.
    fn init(&mut self) -> Result<(), TransportError>;

    /// Lists every interface with the given vendor and product ids.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if listing fails.
    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceInfo>, TransportError>;

    /// Opens an interface by its enumeration path.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the path cannot be opened.
    fn open(&mut self, path: &str) -> Result<Self::Handle, TransportError>;

    /// Releases subsystem resources. Open handles must be dropped first.
    fn release(&mut self);
}

/// An open HID interface that accepts output reports.
///
/// Dropping the writer closes the handle.
pub trait ReportWriter: Send + 'static {
    /// Writes one complete output report.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the write fails.
    fn write_report(&mut self, report: &[u8]) -> Result<(), TransportError>;
}
