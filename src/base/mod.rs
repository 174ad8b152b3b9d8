//! Base types and error handling.
//!
//! Provides foundational types shared by every harness component:
//! - [`HarnessError`](error::HarnessError): the crate-wide error type
//! - [`IoResultExt`](context::IoResultExt): context helpers for IO results

pub mod context;
pub mod error;
