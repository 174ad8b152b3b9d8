//! Channel-driven cookie relay.
//!
//! Stands in for the page loaded at a redirect target: a small actor that
//! owns a path-scoped view of the cookie store and answers two request
//! kinds (read-and-expire, and expire) over a private channel pair.

mod actor;

pub use actor::{RelayCommand, RelayHandle, RelayReply};
