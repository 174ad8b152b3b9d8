//! DOM-direct cookie admission example.
//!
//! Demonstrates the jar's admission rules without any HTTP traffic.

use cookienet::cookies::canonicalcookie::CookieSource;
use cookienet::cookies::jar::{CookieAccess, CookieJar};
use cookienet::cookies::vectors::ctl_characters;

fn main() {
    let jar = CookieJar::new();

    // A plain pair round-trips.
    jar.apply_set_cookie("/", "session=abc123", CookieSource::Dom);
    println!("after plain write: {:?}", jar.cookie_string_for_path("/"));

    // A linefeed terminates the line; the attribute after it is lost.
    jar.delete_all();
    jar.apply_set_cookie("/", "truncated=yes\n; Path=/other", CookieSource::Dom);
    println!("after LF write:    {:?}", jar.cookie_string_for_path("/"));

    // Any other control character rejects the whole cookie.
    jar.delete_all();
    for ctl in ctl_characters().rejecting {
        jar.apply_set_cookie("/", &format!("bad=1{}2", ctl.chr), CookieSource::Dom);
    }
    println!(
        "after {} rejecting writes: {:?}",
        ctl_characters().rejecting.len(),
        jar.cookie_string_for_path("/")
    );
}
