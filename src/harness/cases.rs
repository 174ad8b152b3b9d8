use crate::base::error::HarnessError;
use crate::cookies::canonicalcookie::CookieSource;
use crate::harness::context::CookieHarness;
use crate::relay::RelayHandle;
use serde::Serialize;
use url::{form_urlencoded, Url};

/// One or several Set-Cookie lines, in the order the server should emit
/// them. Encodes to a JSON string or array in the `set=`/`drop=` query
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SetCookieInput {
    Single(String),
    Many(Vec<String>),
}

impl SetCookieInput {
    fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&str> for SetCookieInput {
    fn from(line: &str) -> Self {
        SetCookieInput::Single(line.to_string())
    }
}

impl From<String> for SetCookieInput {
    fn from(line: String) -> Self {
        SetCookieInput::Single(line)
    }
}

impl From<Vec<String>> for SetCookieInput {
    fn from(lines: Vec<String>) -> Self {
        SetCookieInput::Many(lines)
    }
}

impl From<Vec<&str>> for SetCookieInput {
    fn from(lines: Vec<&str>) -> Self {
        SetCookieInput::Many(lines.into_iter().map(String::from).collect())
    }
}

/// Compare an observed cookie string against the expectation. The verdict
/// in the error distinguishes "was set as expected" (a value was
/// expected) from "was rejected" (emptiness was expected).
pub(crate) fn check_cookie_string(actual: &str, expected: &str) -> Result<(), HarnessError> {
    if actual == expected {
        return Ok(());
    }
    let detail = if expected.is_empty() {
        "The cookie was rejected."
    } else {
        "The cookie was set as expected."
    };
    Err(HarnessError::CookieMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
        detail,
    })
}

/// The path component of a redirect location, which may be a bare path or
/// an absolute URL.
fn location_path(location: &str) -> String {
    match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location
            .split('?')
            .next()
            .unwrap_or(location)
            .to_string(),
    }
}

impl CookieHarness {
    fn endpoint_url(&self, query: &str) -> Result<Url, HarnessError> {
        let url = self
            .server()
            .url(&format!("{}?{}", self.config().endpoint_path, query));
        Ok(Url::parse(&url)?)
    }

    /// Set cookies via the HTTP endpoint, verify the resulting cookie
    /// string, then drop them via the endpoint.
    ///
    /// Most cookies are set without a Path attribute and therefore land
    /// on the endpoint's default path; pass `default_path = true` to read
    /// them back there. With `false` the read happens at the top-level
    /// page path.
    pub async fn http_cookie_test(
        &self,
        cookie: impl Into<SetCookieInput>,
        expected: &str,
        default_path: bool,
    ) -> Result<(), HarnessError> {
        let json = cookie.into().to_json()?;

        let set_query = form_urlencoded::Serializer::new(String::new())
            .append_pair("set", &json)
            .finish();
        self.fetcher().get(&self.endpoint_url(&set_query)?).await?;

        let cookies = if default_path {
            self.default_path_cookies(&self.config().default_path)
        } else {
            self.store().cookie_string_for_path(&self.config().page_path)
        };
        check_cookie_string(&cookies, expected)?;

        let drop_query = form_urlencoded::Serializer::new(String::new())
            .append_pair("drop", &json)
            .finish();
        self.fetcher().get(&self.endpoint_url(&drop_query)?).await?;
        Ok(())
    }

    /// Variation on [`http_cookie_test`](Self::http_cookie_test) where the
    /// endpoint also redirects via a Location header: cookies are read
    /// back (and expired) at the redirect target through the relay.
    pub async fn http_redirect_cookie_test(
        &self,
        cookie: impl Into<SetCookieInput>,
        expected: &str,
        location: &str,
    ) -> Result<(), HarnessError> {
        self.expire_redirected_cookies(location).await?;

        let json = cookie.into().to_json()?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("set", &json)
            .append_pair("location", location)
            .finish();
        self.fetcher().get(&self.endpoint_url(&query)?).await?;

        let cookies = self.get_and_expire_redirected_cookies(location).await?;
        check_cookie_string(&cookies, expected)
    }

    /// Set a cookie directly into the jar (DOM-style), verify, then clean
    /// up. Needed where header transport would itself mutate the line
    /// under test, e.g. control characters.
    pub async fn dom_cookie_test(
        &self,
        cookie: &str,
        expected: &str,
    ) -> Result<(), HarnessError> {
        let page = self.config().page_path.clone();
        self.store().delete_all();

        self.store()
            .apply_set_cookie(&page, cookie, CookieSource::Dom);
        let actual = self.store().cookie_string_for_path(&page);
        let result = check_cookie_string(&actual, expected);

        // Cleanup runs whether or not the check passed.
        self.store().delete_all();
        result
    }

    /// Read the cookies visible on the default path, then expire the
    /// `test` cookie there. Single-shot.
    pub fn default_path_cookies(&self, path: &str) -> String {
        let echo_path = format!(
            "{}/{}",
            path.trim_end_matches('/'),
            self.config().echo_page
        );
        let cookies = self.store().cookie_string_for_path(&echo_path);
        self.store().expire_cookie("test", path);
        cookies
    }

    /// Read and expire the cookies visible at a redirect target, through
    /// a freshly spawned relay. One exchange at a time; concurrent calls
    /// against the same harness would race on the shared jar.
    pub async fn get_and_expire_redirected_cookies(
        &self,
        location: &str,
    ) -> Result<String, HarnessError> {
        let relay = RelayHandle::spawn(self.store().clone(), location_path(location));
        relay.get_and_expire().await
    }

    /// Expire the cookies at a redirect target before a test starts.
    pub async fn expire_redirected_cookies(&self, location: &str) -> Result<(), HarnessError> {
        let relay = RelayHandle::spawn(self.store().clone(), location_path(location));
        relay.expire().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_encodes_as_string_or_array() {
        let single: SetCookieInput = "a=b".into();
        assert_eq!(single.to_json().unwrap(), r#""a=b""#);

        let many: SetCookieInput = vec!["a=b", "c=d"].into();
        assert_eq!(many.to_json().unwrap(), r#"["a=b","c=d"]"#);
    }

    #[test]
    fn test_check_verdicts() {
        assert!(check_cookie_string("a=b", "a=b").is_ok());
        assert!(check_cookie_string("", "").is_ok());

        let err = check_cookie_string("", "a=b").unwrap_err();
        assert!(err.to_string().contains("The cookie was set as expected."));

        let err = check_cookie_string("a=b", "").unwrap_err();
        assert!(err.to_string().contains("The cookie was rejected."));
    }

    #[test]
    fn test_location_path() {
        assert_eq!(location_path("/cookies/resources/redirect"), "/cookies/resources/redirect");
        assert_eq!(location_path("/a/b?x=1"), "/a/b");
        assert_eq!(location_path("http://127.0.0.1:9/a/b?x=1"), "/a/b");
    }
}
