//! Cookie jar, Set-Cookie admission, and test-vector generation.
//!
//! This module re-expresses the browser's cookie machinery as explicit
//! components so cookie semantics can be exercised without a browser:
//!
//! | Browser concept | cookienet | Responsibility |
//! |-----------------|-----------|----------------|
//! | cookie jar | [`CookieJar`](jar::CookieJar) | Path-scoped storage with RFC 6265 matching |
//! | `document.cookie` read | [`CookieAccess::cookie_string_for_path`](jar::CookieAccess::cookie_string_for_path) | Render visible cookies for a path |
//! | `document.cookie` write / `Set-Cookie` | [`CookieAccess::apply_set_cookie`](jar::CookieAccess::apply_set_cookie) | Admission: truncation, rejection, attributes |
//! | cookie deletion capability | [`CookieAccess::delete_all`](jar::CookieAccess::delete_all) | Clear the jar |
//!
//! Admission rules applied on every write, from either source:
//!
//! - NUL, LF, and CR terminate the line; parsing continues on the prefix
//! - any other control character (%x01-08, %x0B, %x0C, %x0E-1F, %x7F)
//!   rejects the line entirely
//! - combined name+value above 4096 bytes rejects the line (the `=`
//!   separator does not count)
//! - an `HttpOnly` cookie cannot be written from the DOM source
//!
//! [`vectors`] provides the control-character and length test vectors used
//! to probe these rules.

pub mod canonicalcookie;
pub mod jar;
pub mod setparser;
pub mod vectors;
