//! # cookienet
//!
//! A browser-free harness for verifying HTTP cookie semantics.
//!
//! `cookienet` re-expresses the moving parts of browser cookie tests as
//! explicit in-process components: the cookie jar is a path-scoped store
//! behind an injected capability, the cookie-setting endpoint is a
//! loopback fixture server, and the cross-frame relay is a channel-driven
//! actor. On top of these, the harness exposes self-contained test-case
//! operations that set a cookie, read it back, check the result, and
//! clean up.
//!
//! ## Features
//!
//! - **Admission semantics**: terminating control characters truncate,
//!   other control characters reject, 4096-byte name+value cap
//! - **RFC 6265 matching**: path matching, default-path computation,
//!   longest-path-first cookie strings
//! - **Redirect propagation**: Location redirects followed with cookies
//!   applied at every hop, read back at the target via the relay
//! - **Test vectors**: control-character and length-boundary generators
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cookienet::harness::CookieHarness;
//!
//! #[tokio::main]
//! async fn main() {
//!     let harness = CookieHarness::start().await.unwrap();
//!     harness.http_cookie_test("a=b", "a=b", true).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error types and IO context helpers
//! - [`cookies`] - Cookie jar, Set-Cookie admission, test vectors
//! - [`relay`] - Channel-driven read-and-expire relay
//! - [`server`] - Loopback fixture server (`set`/`drop`/`location`)
//! - [`fetch`] - Jar-aware GET client with redirect following
//! - [`harness`] - Test-case orchestration

pub mod base;
pub mod cookies;
pub mod fetch;
pub mod harness;
pub mod relay;
pub mod server;
