use cookienet::cookies::jar::{CookieAccess, CookieJar};
use cookienet::fetch::CookieFetcher;
use cookienet::server::CookieTestServer;
use std::sync::Arc;
use url::Url;

fn fixture() -> (Arc<CookieJar>, CookieFetcher) {
    let jar = Arc::new(CookieJar::new());
    let fetcher = CookieFetcher::new(jar.clone());
    (jar, fetcher)
}

#[tokio::test]
async fn test_set_single_cookie() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    let url = Url::parse(&server.url("/cookies/resources/cookie?set=%22a%3Db%22")).unwrap();
    let outcome = fetcher.get(&url).await.unwrap();
    assert_eq!(outcome.status, 200);

    // No Path attribute: visible on the default path, not at the root.
    assert_eq!(jar.cookie_string_for_path("/cookies/resources/echo"), "a=b");
    assert_eq!(jar.cookie_string_for_path("/"), "");
}

#[tokio::test]
async fn test_set_array_preserves_header_order() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    // JSON array ["a=first","a=second"]: the later header must win.
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("set", r#"["a=first","a=second","b=1"]"#)
        .finish();
    let url = Url::parse(&server.url(&format!("/cookies/resources/cookie?{}", encoded))).unwrap();
    fetcher.get(&url).await.unwrap();

    let cookies = jar.cookie_string_for_path("/cookies/resources/echo");
    assert!(cookies.contains("a=second"));
    assert!(!cookies.contains("a=first"));
    assert!(cookies.contains("b=1"));
}

#[tokio::test]
async fn test_raw_set_value_without_json() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    // A non-JSON value is treated as one raw Set-Cookie line.
    let url = Url::parse(&server.url("/cookies/resources/cookie?set=plain%3D1")).unwrap();
    fetcher.get(&url).await.unwrap();

    assert_eq!(
        jar.cookie_string_for_path("/cookies/resources/echo"),
        "plain=1"
    );
}

#[tokio::test]
async fn test_drop_clears_what_set_created() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    let set = Url::parse(&server.url("/cookies/resources/cookie?set=%22a%3Db%22")).unwrap();
    fetcher.get(&set).await.unwrap();
    assert_eq!(jar.cookie_string_for_path("/cookies/resources/echo"), "a=b");

    let drop = Url::parse(&server.url("/cookies/resources/cookie?drop=%22a%3Db%22")).unwrap();
    fetcher.get(&drop).await.unwrap();
    assert_eq!(jar.cookie_string_for_path("/cookies/resources/echo"), "");
}

#[tokio::test]
async fn test_location_redirect_is_followed() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("set", r#""a=b; Path=/""#)
        .append_pair("location", "/cookies/resources/redirect")
        .finish();
    let url = Url::parse(&server.url(&format!("/cookies/resources/cookie?{}", query))).unwrap();

    let outcome = fetcher.get(&url).await.unwrap();
    // The 302 target answers 200 with an empty body.
    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.url.path(), "/cookies/resources/redirect");

    // The cookie from the redirecting response was stored on the way.
    assert_eq!(jar.cookie_string_for_path("/cookies/resources/redirect"), "a=b");
}

#[tokio::test]
async fn test_fetch_sends_stored_cookies() {
    let server = CookieTestServer::start().await.unwrap();
    let (jar, fetcher) = fixture();

    jar.apply_set_cookie(
        "/",
        "carried=1; Path=/",
        cookienet::cookies::canonicalcookie::CookieSource::Http,
    );

    // The fixture ignores the Cookie header, but the request must still
    // succeed with one attached.
    let url = Url::parse(&server.url("/cookies/resources/cookie")).unwrap();
    let outcome = fetcher.get(&url).await.unwrap();
    assert_eq!(outcome.status, 200);
}
