use crate::cookies::canonicalcookie::{CanonicalCookie, CookieSource};
use crate::cookies::setparser::parse_set_cookie;
use dashmap::DashMap;
use std::sync::Arc;
use time::OffsetDateTime;

/// The storage capability injected into the harness, relay, and fetcher.
///
/// Abstracts the cookie store so test logic is decoupled from any specific
/// substrate: read all cookies visible at a path, write one Set-Cookie
/// line, expire one cookie, delete everything.
pub trait CookieAccess: Send + Sync {
    /// Render the cookies visible at `request_path` as a cookie string
    /// (`"a=b; c=d"`), ordered by path length descending then creation
    /// time ascending.
    fn cookie_string_for_path(&self, request_path: &str) -> String;

    /// Apply one Set-Cookie line against `request_path`. Inadmissible
    /// lines are dropped silently; an expired line removes the matching
    /// stored cookie.
    fn apply_set_cookie(&self, request_path: &str, line: &str, source: CookieSource);

    /// Remove the cookie with the given name stored at exactly `path`.
    fn expire_cookie(&self, name: &str, path: &str);

    /// Remove every cookie in the store.
    fn delete_all(&self);
}

/// In-memory cookie jar for a single origin, keyed by cookie path.
pub struct CookieJar {
    // Store: Map<Path, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        let now = OffsetDateTime::now_utc();
        let mut entry = self.store.entry(cookie.path.clone()).or_default();

        // Replace existing if name/path match
        entry.retain(|c| c.name != cookie.name);

        // An already-expired cookie only removes; nothing is stored.
        if cookie.is_expired(now) {
            tracing::debug!(name = %cookie.name, path = %cookie.path, "expired cookie removed");
            return;
        }

        entry.push(cookie);
    }

    /// Get cookies matching the request path, unexpired, with proper
    /// RFC 6265 path matching. Sorted by path length (longest first) then
    /// creation time.
    pub fn get_cookies_for_path(&self, request_path: &str) -> Vec<CanonicalCookie> {
        let mut result = Vec::new();
        let now = OffsetDateTime::now_utc();

        for entry in self.store.iter() {
            for cookie in entry.value().iter() {
                if !Self::path_matches(&cookie.path, request_path) {
                    continue;
                }
                if cookie.is_expired(now) {
                    continue;
                }
                result.push(cookie.clone());
            }
        }

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
        });

        result
    }

    /// Check if request path matches cookie path.
    /// Implements RFC 6265 path matching.
    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }

        if request_path.starts_with(cookie_path) {
            if cookie_path.ends_with('/') {
                return true;
            }
            let next_char = request_path.chars().nth(cookie_path.len());
            return next_char == Some('/');
        }

        false
    }

    /// Total stored cookie count.
    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }
}

impl CookieAccess for CookieJar {
    fn cookie_string_for_path(&self, request_path: &str) -> String {
        self.get_cookies_for_path(request_path)
            .iter()
            .map(|c| c.rendered())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn apply_set_cookie(&self, request_path: &str, line: &str, source: CookieSource) {
        let now = OffsetDateTime::now_utc();
        match parse_set_cookie(line, request_path, source, now) {
            Some(cookie) => self.set_canonical_cookie(cookie),
            None => {
                tracing::debug!(path = %request_path, "cookie line rejected");
            }
        }
    }

    fn expire_cookie(&self, name: &str, path: &str) {
        if let Some(mut entry) = self.store.get_mut(path) {
            entry.retain(|c| c.name != name);
        }
    }

    fn delete_all(&self) {
        self.store.clear();
    }
}
