//! Jar-aware HTTP fetch.
//!
//! A minimal GET client bound to a cookie store: sends the cookies
//! visible at the request path, stores every `Set-Cookie` response header
//! against that path, and follows `Location` redirects, applying cookies
//! at each hop.

mod client;

pub use client::{CookieFetcher, FetchOutcome};
