//! Test-case orchestration.
//!
//! [`CookieHarness`](context::CookieHarness) bundles the jar, the fixture
//! server, and the fetcher, and exposes the test-case operations:
//! set-via-HTTP-then-verify, set-via-redirect-then-verify via the relay,
//! and set-via-DOM-then-verify. Each operation sets, reads back, checks,
//! and cleans up, mirroring one self-contained test case.

mod cases;
mod context;

pub use cases::SetCookieInput;
pub use context::{CookieHarness, HarnessConfig};
