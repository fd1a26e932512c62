// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `litra_lib` library.
//!
//! Failures fall into three families: value validation (raised by the
//! encoder before any I/O), device lookup, and transport I/O. The connection
//! manager wraps the last lookup or transport failure in
//! [`Error::RetriesExhausted`] once its retry budget is spent.

use thiserror::Error;

use crate::manager::DeviceFilter;
use crate::types::LightTarget;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was out of range or unsupported by the target.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Opening or writing to the HID device failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Enumeration found no interface matching the filter.
    #[error("no Litra device found ({0})")]
    DeviceNotFound(DeviceFilter),

    /// Every attempt in the retry budget failed.
    #[error("all {attempts} write attempts failed: {last}")]
    RetriesExhausted {
        /// Number of attempts made, including the first one.
        attempts: u32,
        /// The failure of the final attempt.
        #[source]
        last: Box<Error>,
    },

    /// The manager was closed during shutdown.
    #[error("device manager is closed")]
    Closed,

    /// A preset settings document could not be parsed.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// A blocking transport task panicked or was cancelled.
    #[error("transport task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Returns true if the connection manager retries this error.
    ///
    /// Lookup and transport failures are transient: the lamp may be
    /// re-plugged or re-enumerated between attempts.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DeviceNotFound(_) | Self::Transport(_))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// The target light has no such feature.
    #[error("{target} light does not support {operation}")]
    UnsupportedTarget {
        /// The light the command was addressed to.
        target: LightTarget,
        /// The operation that was requested.
        operation: &'static str,
    },

    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// A light target name was not recognized.
    #[error("unknown light target: {0}")]
    UnknownTarget(String),
}

/// Errors raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The native HID library reported an error.
    #[cfg(feature = "hidapi")]
    #[error("HID error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// The HID subsystem could not be initialized.
    #[error("HID init failed: {0}")]
    Init(String),

    /// Listing attached devices failed.
    #[error("enumeration failed: {0}")]
    Enumerate(String),

    /// The device path could not be opened.
    #[error("failed to open {path}: {message}")]
    Open {
        /// The platform device path.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// A report write failed.
    #[error("write failed: {0}")]
    Write(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
