//! Ergonomic error context helpers.
//!
//! Extension trait for converting IO results into context-rich
//! [`HarnessError`] variants at the points where the harness touches
//! sockets.

use crate::base::error::HarnessError;
use std::io;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add connection context to an IO error.
    fn connection_context(self, host: &str, port: u16) -> Result<T, HarnessError>;

    /// Add listener-bind context to an IO error.
    fn bind_context(self, addr: &str) -> Result<T, HarnessError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn connection_context(self, host: &str, port: u16) -> Result<T, HarnessError> {
        self.map_err(|e| HarnessError::connection_failed_to(host, port, e))
    }

    fn bind_context(self, addr: &str) -> Result<T, HarnessError> {
        self.map_err(|e| HarnessError::bind_failed(addr, e))
    }
}
