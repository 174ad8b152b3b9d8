use crate::base::context::IoResultExt;
use crate::base::error::HarnessError;
use crate::cookies::canonicalcookie::CookieSource;
use crate::cookies::jar::CookieAccess;
use bytes::Bytes;
use http::header::{COOKIE, HOST, LOCATION, SET_COOKIE};
use http::{Request, Response, StatusCode};
use http_body_util::Empty;
use hyper::body::Incoming;
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;
use url::{Position, Url};

const REDIRECT_LIMIT: u8 = 20;

/// Result of a completed fetch: the final status and the URL that
/// produced it (after any redirects).
#[derive(Debug)]
pub struct FetchOutcome {
    pub status: StatusCode,
    pub url: Url,
}

/// GET client bound to a cookie store.
pub struct CookieFetcher {
    store: Arc<dyn CookieAccess>,
}

impl CookieFetcher {
    pub fn new(store: Arc<dyn CookieAccess>) -> Self {
        Self { store }
    }

    /// Issue a GET, storing response cookies and following redirects.
    pub async fn get(&self, url: &Url) -> Result<FetchOutcome, HarnessError> {
        let mut url = url.clone();
        let mut hops_left = REDIRECT_LIMIT;

        loop {
            let response = self.send_once(&url).await?;

            // Cookies apply before the redirect is followed.
            for value in response.headers().get_all(SET_COOKIE) {
                if let Ok(line) = value.to_str() {
                    self.store
                        .apply_set_cookie(url.path(), line, CookieSource::Http);
                }
            }

            if response.status().is_redirection() {
                let target = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|loc| url.join(loc).ok());

                if let Some(next) = target {
                    if hops_left == 0 {
                        return Err(HarnessError::TooManyRedirects);
                    }
                    hops_left -= 1;
                    tracing::debug!(from = %url, to = %next, "following redirect");
                    url = next;
                    continue;
                }
            }

            return Ok(FetchOutcome {
                status: response.status(),
                url,
            });
        }
    }

    async fn send_once(&self, url: &Url) -> Result<Response<Incoming>, HarnessError> {
        let host = url
            .host_str()
            .ok_or_else(|| HarnessError::InvalidUrl(url.to_string()))?;
        let port = url.port_or_known_default().unwrap_or(80);

        let socket = TcpStream::connect((host, port))
            .await
            .connection_context(host, port)?;
        let io = TokioIo::new(socket);

        let (mut sender, conn) = http1::handshake(io)
            .await
            .map_err(|e| HarnessError::Handshake(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!(error = %e, "connection driver ended");
            }
        });

        let mut builder = Request::builder()
            .method("GET")
            .uri(url[Position::BeforePath..].to_string())
            .header(HOST, format!("{}:{}", host, port));

        let cookies = self.store.cookie_string_for_path(url.path());
        if !cookies.is_empty() {
            builder = builder.header(COOKIE, cookies);
        }

        let request = builder
            .body(Empty::<Bytes>::new())
            .map_err(|e| HarnessError::Request(e.to_string()))?;

        sender
            .send_request(request)
            .await
            .map_err(|e| HarnessError::Request(e.to_string()))
    }
}
