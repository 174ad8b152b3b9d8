//! End-to-end cookie test example.
//!
//! Starts the loopback fixture server and runs one set/verify/drop cycle
//! plus one redirect cycle.

use cookienet::harness::CookieHarness;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let harness = CookieHarness::start().await.expect("harness start");

    match harness.http_cookie_test("a=b", "a=b", true).await {
        Ok(()) => println!("basic set: ok"),
        Err(e) => println!("basic set: {e}"),
    }

    match harness
        .http_redirect_cookie_test("a=b", "a=b", "/cookies/resources/redirect")
        .await
    {
        Ok(()) => println!("redirect set: ok"),
        Err(e) => println!("redirect set: {e}"),
    }
}
