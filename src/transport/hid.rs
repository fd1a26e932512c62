// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Native HID access through `hidapi`.

use std::ffi::CString;

use hidapi::{HidApi, HidDevice};

use crate::error::TransportError;

use super::{DeviceInfo, ReportWriter, Transport};

/// Transport backed by the platform HID stack.
///
/// The `HidApi` context is created lazily by [`Transport::init`] and
/// dropped by [`Transport::release`], so a failed connection starts the
/// next attempt from a fresh context.
#[derive(Default)]
pub struct HidApiTransport {
    api: Option<HidApi>,
}

impl HidApiTransport {
    /// Creates a transport with no context yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for HidApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HidApiTransport")
            .field("initialized", &self.api.is_some())
            .finish()
    }
}

impl Transport for HidApiTransport {
    type Handle = HidReportWriter;

    fn init(&mut self) -> Result<(), TransportError> {
        match self.api.as_mut() {
            Some(api) => api.refresh_devices()?,
            None => self.api = Some(HidApi::new()?),
        }
        Ok(())
    }

    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceInfo>, TransportError> {
        let api = self
            .api
            .as_ref()
            .ok_or_else(|| TransportError::Enumerate("HID subsystem not initialized".to_string()))?;

        Ok(api
            .device_list()
            .filter(|d| d.vendor_id() == vendor_id && d.product_id() == product_id)
            .map(|d| DeviceInfo {
                path: d.path().to_string_lossy().into_owned(),
                vendor_id: d.vendor_id(),
                product_id: d.product_id(),
                usage_page: d.usage_page(),
                interface_number: d.interface_number(),
                product: d.product_string().map(str::to_string),
            })
            .collect())
    }

    fn open(&mut self, path: &str) -> Result<HidReportWriter, TransportError> {
        let api = self.api.as_ref().ok_or_else(|| TransportError::Open {
            path: path.to_string(),
            message: "HID subsystem not initialized".to_string(),
        })?;
        let c_path = CString::new(path).map_err(|e| TransportError::Open {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let device = api.open_path(&c_path).map_err(|e| TransportError::Open {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(HidReportWriter { device })
    }

    fn release(&mut self) {
        self.api = None;
    }
}

/// An open `hidapi` device.
pub struct HidReportWriter {
    device: HidDevice,
}

impl std::fmt::Debug for HidReportWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HidReportWriter").finish_non_exhaustive()
    }
}

impl ReportWriter for HidReportWriter {
    fn write_report(&mut self, report: &[u8]) -> Result<(), TransportError> {
        // The returned byte count is not checked; the lamp accepts full
        // reports or fails the call outright.
        self.device.write(report)?;
        Ok(())
    }
}
