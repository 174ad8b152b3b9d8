use time::OffsetDateTime;

/// Where a cookie write originated. DOM writes are subject to the same
/// admission rules as HTTP writes, except that `HttpOnly` cookies cannot
/// be created from the DOM side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieSource {
    Http,
    Dom,
}

/// A stored cookie in its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub source: CookieSource,
}

impl CanonicalCookie {
    pub fn new(
        name: String,
        value: String,
        path: String,
        creation_time: OffsetDateTime,
        expiration_time: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name,
            value,
            path,
            creation_time,
            expiration_time,
            secure: false,
            http_only: false,
            source: CookieSource::Http,
        }
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        if let Some(expiry) = self.expiration_time {
            expiry <= current_time
        } else {
            false
        }
    }

    /// Render this cookie as it appears in a cookie string. A nameless
    /// cookie renders as its bare value.
    pub fn rendered(&self) -> String {
        if self.name.is_empty() {
            self.value.clone()
        } else {
            format!("{}={}", self.name, self.value)
        }
    }

    /// Compute the default path for a request-uri path per RFC 6265
    /// section 5.1.4: everything up to but not including the rightmost
    /// `/`, falling back to `/`.
    pub fn default_path(request_path: &str) -> String {
        if !request_path.starts_with('/') {
            return "/".to_string();
        }
        match request_path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(idx) => request_path[..idx].to_string(),
        }
    }
}
