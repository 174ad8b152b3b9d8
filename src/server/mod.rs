//! Fixture HTTP server for cookie tests.
//!
//! Serves the server half of the harness contract: a GET with
//! `set=<url-encoded JSON-or-string>` emits one `Set-Cookie` header per
//! line (optionally alongside a `Location` redirect), and a GET with
//! `drop=<...>` re-emits the same lines expired.

mod fixture;

pub use fixture::CookieTestServer;
