// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration types for the device manager.

use std::fmt;
use std::time::Duration;

use crate::transport::DeviceInfo;

/// Identifies the HID interface to talk to.
///
/// The lamp exposes several interfaces under the same vendor and product ids;
/// only the one on the vendor usage page accepts lighting reports.
///
/// # Examples
///
/// ```
/// use litra_lib::manager::DeviceFilter;
///
/// let filter = DeviceFilter::default();
/// assert_eq!(filter.to_string(), "VID=0x046d PID=0xc903 UsagePage=0xff43");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceFilter {
    /// USB vendor id.
    pub vendor_id: u16,
    /// USB product id.
    pub product_id: u16,
    /// HID usage page of the lighting interface.
    pub usage_page: u16,
}

impl DeviceFilter {
    /// Logitech Litra Beam LX.
    pub const LITRA_BEAM_LX: Self = Self {
        vendor_id: 0x046D,
        product_id: 0xC903,
        usage_page: 0xFF43,
    };

    /// Creates a filter from explicit ids.
    #[must_use]
    pub const fn new(vendor_id: u16, product_id: u16, usage_page: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            usage_page,
        }
    }

    /// Returns true if the interface matches all three ids.
    #[must_use]
    pub fn matches(&self, info: &DeviceInfo) -> bool {
        info.vendor_id == self.vendor_id
            && info.product_id == self.product_id
            && info.usage_page == self.usage_page
    }
}

impl Default for DeviceFilter {
    fn default() -> Self {
        Self::LITRA_BEAM_LX
    }
}

impl fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VID=0x{:04x} PID=0x{:04x} UsagePage=0x{:04x}",
            self.vendor_id, self.product_id, self.usage_page
        )
    }
}

/// Retry behavior for report batches.
///
/// A batch gets one initial attempt plus `max_retries` more. Before each
/// retry the manager waits `retry_delay`, releases the transport, then waits
/// `reopen_delay` before reconnecting.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use litra_lib::manager::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts(), 4);
///
/// let policy = RetryPolicy::new()
///     .with_max_retries(1)
///     .with_retry_delay(Duration::from_millis(100));
/// assert_eq!(policy.max_attempts(), 2);
///
/// assert_eq!(RetryPolicy::disabled().max_attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Wait after a failure, before the transport is released.
    pub retry_delay: Duration,
    /// Wait after the release, before reconnecting.
    pub reopen_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Creates a policy with the default budget and no delays.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            retry_delay: Duration::ZERO,
            reopen_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Sets the number of retries.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before releasing the transport.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sets the delay between release and reconnect.
    #[must_use]
    pub fn with_reopen_delay(mut self, delay: Duration) -> Self {
        self.reopen_delay = delay;
        self
    }

    /// Total attempts per batch, the first one included.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
            reopen_delay: Duration::from_secs(1),
        }
    }
}

/// Everything a [`DeviceManager`](super::DeviceManager) needs besides its
/// transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Which interface to open.
    pub filter: DeviceFilter,
    /// How failed batches are retried.
    pub retry: RetryPolicy,
}

impl ManagerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device filter.
    #[must_use]
    pub fn with_filter(mut self, filter: DeviceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
