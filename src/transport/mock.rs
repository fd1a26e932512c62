// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport for tests.
//!
//! [`MockTransport`] is cheap to clone; every clone shares one state, so a
//! test keeps a clone to inspect the write log after handing the other to a
//! [`DeviceManager`](crate::manager::DeviceManager).
//!
//! ```
//! use litra_lib::transport::MockTransport;
//!
//! let mock = MockTransport::litra();
//! mock.fail_next_writes(2);
//! assert_eq!(mock.write_calls(), 0);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::command::{Command, REPORT_LENGTH};
use crate::error::TransportError;
use crate::manager::DeviceFilter;

use super::{DeviceInfo, ReportWriter, Transport};

/// Path of the vendor-protocol interface in [`MockTransport::litra`].
pub const MOCK_LITRA_PATH: &str = "mock://litra/vendor";

/// Path of the decoy interface in [`MockTransport::litra`].
pub const MOCK_DECOY_PATH: &str = "mock://litra/consumer";

#[derive(Debug, Default)]
struct MockState {
    devices: Vec<DeviceInfo>,
    written: Vec<(String, Command)>,
    write_calls: usize,
    init_calls: usize,
    enumerate_calls: usize,
    open_calls: usize,
    release_calls: usize,
    open_handles: usize,
    fail_next_writes: usize,
    fail_write_ordinals: BTreeSet<usize>,
    fail_next_opens: usize,
    fail_next_inits: usize,
    write_latency: Duration,
}

/// A scripted lamp living in memory.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a transport with no devices attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport with one Litra Beam LX attached.
    ///
    /// See [`litra_interfaces`](Self::litra_interfaces) for what it exposes.
    #[must_use]
    pub fn litra() -> Self {
        let mock = Self::new();
        for info in Self::litra_interfaces() {
            mock.plug(info);
        }
        mock
    }

    /// The interfaces of one Litra Beam LX.
    ///
    /// Like the real lamp it exposes two interfaces with the same ids; only
    /// the one at [`MOCK_LITRA_PATH`] carries the vendor usage page. The decoy
    /// is listed first.
    #[must_use]
    pub fn litra_interfaces() -> Vec<DeviceInfo> {
        let filter = DeviceFilter::LITRA_BEAM_LX;
        let product = Some("Litra Beam LX".to_string());
        vec![
            DeviceInfo {
                path: MOCK_DECOY_PATH.to_string(),
                vendor_id: filter.vendor_id,
                product_id: filter.product_id,
                usage_page: 0x000C,
                interface_number: 0,
                product: product.clone(),
            },
            DeviceInfo {
                path: MOCK_LITRA_PATH.to_string(),
                vendor_id: filter.vendor_id,
                product_id: filter.product_id,
                usage_page: filter.usage_page,
                interface_number: 1,
                product,
            },
        ]
    }

    /// Attaches an interface.
    pub fn plug(&self, info: DeviceInfo) {
        self.state.lock().devices.push(info);
    }

    /// Detaches every interface. Open handles keep working until dropped.
    pub fn unplug_all(&self) {
        self.state.lock().devices.clear();
    }

    /// Makes the next `count` write calls fail.
    pub fn fail_next_writes(&self, count: usize) {
        self.state.lock().fail_next_writes = count;
    }

    /// Makes the write call with this 1-based ordinal fail.
    ///
    /// Ordinals count every write call since the transport was created.
    pub fn fail_write_call(&self, ordinal: usize) {
        self.state.lock().fail_write_ordinals.insert(ordinal);
    }

    /// Makes the next `count` open calls fail.
    pub fn fail_next_opens(&self, count: usize) {
        self.state.lock().fail_next_opens = count;
    }

    /// Makes the next `count` init calls fail.
    pub fn fail_next_inits(&self, count: usize) {
        self.state.lock().fail_next_inits = count;
    }

    /// Makes every report write block the calling thread for `latency`,
    /// like a slow USB endpoint.
    pub fn set_write_latency(&self, latency: Duration) {
        self.state.lock().write_latency = latency;
    }

    /// Returns every successfully written report, in order.
    #[must_use]
    pub fn written(&self) -> Vec<Command> {
        self.state.lock().written.iter().map(|(_, c)| *c).collect()
    }

    /// Returns the paths successful writes went to, in order.
    #[must_use]
    pub fn written_paths(&self) -> Vec<String> {
        self.state
            .lock()
            .written
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Clears the write log.
    pub fn clear_written(&self) {
        self.state.lock().written.clear();
    }

    /// Number of write calls, failed ones included.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.state.lock().write_calls
    }

    /// Number of init calls.
    #[must_use]
    pub fn init_calls(&self) -> usize {
        self.state.lock().init_calls
    }

    /// Number of enumerate calls.
    #[must_use]
    pub fn enumerate_calls(&self) -> usize {
        self.state.lock().enumerate_calls
    }

    /// Number of open calls, failed ones included.
    #[must_use]
    pub fn open_calls(&self) -> usize {
        self.state.lock().open_calls
    }

    /// Number of release calls.
    #[must_use]
    pub fn release_calls(&self) -> usize {
        self.state.lock().release_calls
    }

    /// Number of handles currently open.
    #[must_use]
    pub fn open_handles(&self) -> usize {
        self.state.lock().open_handles
    }
}

impl Transport for MockTransport {
    type Handle = MockHandle;

    fn init(&mut self) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        state.init_calls += 1;
        if state.fail_next_inits > 0 {
            state.fail_next_inits -= 1;
            return Err(TransportError::Init("mock init failure".to_string()));
        }
        Ok(())
    }

    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceInfo>, TransportError> {
        let mut state = self.state.lock();
        state.enumerate_calls += 1;
        Ok(state
            .devices
            .iter()
            .filter(|d| d.vendor_id == vendor_id && d.product_id == product_id)
            .cloned()
            .collect())
    }

    fn open(&mut self, path: &str) -> Result<MockHandle, TransportError> {
        let mut state = self.state.lock();
        state.open_calls += 1;
        if state.fail_next_opens > 0 {
            state.fail_next_opens -= 1;
            return Err(TransportError::Open {
                path: path.to_string(),
                message: "mock open failure".to_string(),
            });
        }
        if !state.devices.iter().any(|d| d.path == path) {
            return Err(TransportError::Open {
                path: path.to_string(),
                message: "no such device".to_string(),
            });
        }
        state.open_handles += 1;
        Ok(MockHandle {
            path: path.to_string(),
            state: Arc::clone(&self.state),
        })
    }

    fn release(&mut self) {
        self.state.lock().release_calls += 1;
    }
}

/// An open handle on a [`MockTransport`] interface.
#[derive(Debug)]
pub struct MockHandle {
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ReportWriter for MockHandle {
    fn write_report(&mut self, report: &[u8]) -> Result<(), TransportError> {
        let latency = self.state.lock().write_latency;
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }

        let mut state = self.state.lock();
        state.write_calls += 1;
        let ordinal = state.write_calls;

        if state.fail_next_writes > 0 {
            state.fail_next_writes -= 1;
            return Err(TransportError::Write(format!("mock failure on write {ordinal}")));
        }
        if state.fail_write_ordinals.remove(&ordinal) {
            return Err(TransportError::Write(format!("mock failure on write {ordinal}")));
        }

        let bytes: [u8; REPORT_LENGTH] = report.try_into().map_err(|_| {
            TransportError::Write(format!("expected {REPORT_LENGTH} bytes, got {}", report.len()))
        })?;
        state
            .written
            .push((self.path.clone(), Command::from_bytes(bytes)));
        Ok(())
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.open_handles = state.open_handles.saturating_sub(1);
    }
}
