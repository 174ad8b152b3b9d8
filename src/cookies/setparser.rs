//! Set-Cookie line admission.
//!
//! Turns a raw Set-Cookie line (from an HTTP response header or a direct
//! DOM-style write) into a [`CanonicalCookie`], applying the control
//! character and size rules before any attribute parsing. Attribute
//! parsing (Path, Expires, Max-Age, Secure, HttpOnly) is delegated to the
//! `cookie` crate.

use crate::cookies::canonicalcookie::{CanonicalCookie, CookieSource};
use time::OffsetDateTime;

/// Maximum combined byte length of a cookie's name and value.
/// The `=` separator does not count toward the limit.
pub const MAX_NAME_VALUE_BYTES: usize = 4096;

/// Control characters that terminate a cookie line rather than reject it:
/// NUL, LF, CR. Everything after the first one is discarded.
const TERMINATORS: [char; 3] = ['\0', '\n', '\r'];

/// Apply the control-character rules: cut the line at the first
/// terminator, then reject the prefix outright if any other control
/// character (%x01-08, %x0B, %x0C, %x0E-1F, %x7F) remains.
fn sanitize_line(line: &str) -> Option<&str> {
    let cut = match line.find(&TERMINATORS[..]) {
        Some(idx) => &line[..idx],
        None => line,
    };
    if cut.chars().any(|c| c.is_ascii_control()) {
        return None;
    }
    Some(cut)
}

/// Parse a Set-Cookie line into a canonical cookie, or `None` if the line
/// is inadmissible. An already-expired result is still returned; the jar
/// uses it to remove the matching stored cookie.
pub fn parse_set_cookie(
    line: &str,
    request_path: &str,
    source: CookieSource,
    now: OffsetDateTime,
) -> Option<CanonicalCookie> {
    let line = sanitize_line(line)?;

    let (pair, attrs) = match line.split_once(';') {
        Some((pair, attrs)) => (pair, Some(attrs)),
        None => (line, None),
    };

    // A missing `=` makes the whole token the value of a nameless cookie.
    let (name, value) = match pair.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => ("", pair.trim()),
    };

    if name.is_empty() && value.is_empty() {
        tracing::debug!(line = %line, "rejected cookie with empty name and value");
        return None;
    }

    if name.len() + value.len() > MAX_NAME_VALUE_BYTES {
        tracing::debug!(
            name_len = name.len(),
            value_len = value.len(),
            "rejected oversized cookie"
        );
        return None;
    }

    let mut path = None;
    let mut expiration_time = None;
    let mut secure = false;
    let mut http_only = false;

    if let Some(attrs) = attrs {
        // The pair itself may be nameless, which the cookie crate refuses
        // to parse, so attributes are probed with a placeholder pair.
        match cookie::Cookie::parse(format!("c=v;{}", attrs)) {
            Ok(probe) => {
                path = probe
                    .path()
                    .filter(|p| p.starts_with('/'))
                    .map(|p| p.to_string());
                // Max-Age takes precedence over Expires per RFC 6265.
                expiration_time = match probe.max_age() {
                    Some(max_age) => Some(now + max_age),
                    None => probe.expires().and_then(|e| e.datetime()),
                };
                secure = probe.secure().unwrap_or(false);
                http_only = probe.http_only().unwrap_or(false);
            }
            Err(e) => {
                tracing::debug!(error = %e, "unparseable cookie attributes ignored");
            }
        }
    }

    if http_only && source == CookieSource::Dom {
        tracing::debug!(name = %name, "rejected HttpOnly cookie from DOM write");
        return None;
    }

    let path = path.unwrap_or_else(|| CanonicalCookie::default_path(request_path));

    let mut cookie = CanonicalCookie::new(
        name.to_string(),
        value.to_string(),
        path,
        now,
        expiration_time,
    );
    cookie.secure = secure;
    cookie.http_only = http_only;
    cookie.source = source;
    Some(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<CanonicalCookie> {
        parse_set_cookie(line, "/", CookieSource::Dom, OffsetDateTime::now_utc())
    }

    #[test]
    fn test_plain_pair() {
        let c = parse("a=b").unwrap();
        assert_eq!(c.name, "a");
        assert_eq!(c.value, "b");
        assert_eq!(c.path, "/");
    }

    #[test]
    fn test_terminator_truncates() {
        let c = parse("a=b\0c=d").unwrap();
        assert_eq!(c.rendered(), "a=b");
        let c = parse("a=b\nSecure").unwrap();
        assert!(!c.secure);
        let c = parse("a=b\rc").unwrap();
        assert_eq!(c.rendered(), "a=b");
    }

    #[test]
    fn test_other_ctl_rejects() {
        assert!(parse("a=b\x01").is_none());
        assert!(parse("a\x07=b").is_none());
        assert!(parse("a=b\x7f").is_none());
    }

    #[test]
    fn test_ctl_after_terminator_is_discarded() {
        // Parsing stops at the LF, so the later ESC never participates.
        let c = parse("a=b\n\x1bjunk").unwrap();
        assert_eq!(c.rendered(), "a=b");
    }

    #[test]
    fn test_nameless_cookie() {
        let c = parse("bare").unwrap();
        assert_eq!(c.name, "");
        assert_eq!(c.value, "bare");
        assert_eq!(c.rendered(), "bare");

        let c = parse("=leading").unwrap();
        assert_eq!(c.name, "");
        assert_eq!(c.value, "leading");
    }

    #[test]
    fn test_empty_name_and_value_rejected() {
        assert!(parse("=").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_size_limit_excludes_separator() {
        let fit = format!("{}={}", "t".repeat(2048), "1".repeat(2048));
        assert!(parse(&fit).is_some());
        let over = format!("{}={}", "t".repeat(2049), "1".repeat(2048));
        assert!(parse(&over).is_none());
    }

    #[test]
    fn test_path_attribute() {
        let c = parse("a=b; Path=/foo").unwrap();
        assert_eq!(c.path, "/foo");
        // A path not starting with `/` falls back to the default path.
        let c = parse_set_cookie(
            "a=b; Path=foo",
            "/bar/baz",
            CookieSource::Http,
            OffsetDateTime::now_utc(),
        )
        .unwrap();
        assert_eq!(c.path, "/bar");
    }

    #[test]
    fn test_max_age_wins_over_expires() {
        let now = OffsetDateTime::now_utc();
        let c = parse_set_cookie(
            "a=b; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=3600",
            "/",
            CookieSource::Http,
            now,
        )
        .unwrap();
        assert!(!c.is_expired(now));
    }

    #[test]
    fn test_http_only_from_dom_rejected() {
        assert!(parse("a=b; HttpOnly").is_none());
        let c = parse_set_cookie(
            "a=b; HttpOnly",
            "/",
            CookieSource::Http,
            OffsetDateTime::now_utc(),
        );
        assert!(c.is_some());
    }
}
