use crate::base::context::IoResultExt;
use crate::base::error::HarnessError;
use bytes::Bytes;
use http::header::{HeaderValue, LOCATION, SET_COOKIE};
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The `set`/`drop` query values: a single Set-Cookie line or an ordered
/// list of them, JSON-encoded. Non-JSON input is treated as one raw line.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CookieLines {
    One(String),
    Many(Vec<String>),
}

impl CookieLines {
    fn decode(raw: &str) -> Vec<String> {
        match serde_json::from_str::<CookieLines>(raw) {
            Ok(CookieLines::One(line)) => vec![line],
            Ok(CookieLines::Many(lines)) => lines,
            Err(_) => vec![raw.to_string()],
        }
    }
}

/// Loopback fixture server answering the cookie-setting contract.
///
/// Started on an ephemeral port; the accept loop is aborted when the
/// server is dropped.
pub struct CookieTestServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl CookieTestServer {
    pub async fn start() -> Result<Self, HarnessError> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .bind_context("127.0.0.1:0")?;
        let addr = listener.local_addr().bind_context("127.0.0.1:0")?;

        let task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((socket, _peer)) => {
                        tokio::spawn(async move {
                            let io = TokioIo::new(socket);
                            if let Err(e) = http1::Builder::new()
                                .serve_connection(io, service_fn(handle))
                                .await
                            {
                                tracing::debug!(error = %e, "fixture connection ended with error");
                            }
                        });
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "fixture accept failed");
                    }
                }
            }
        });

        tracing::debug!(addr = %addr, "cookie fixture server started");
        Ok(Self { addr, task })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for a path (and optional query) on this server.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for CookieTestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let query = req.uri().query().unwrap_or("");
    let mut set = None;
    let mut drop_lines = None;
    let mut location = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match &*key {
            "set" => set = Some(value.into_owned()),
            "drop" => drop_lines = Some(value.into_owned()),
            "location" => location = Some(value.into_owned()),
            _ => {}
        }
    }

    tracing::debug!(
        path = %req.uri().path(),
        setting = set.is_some(),
        dropping = drop_lines.is_some(),
        redirecting = location.is_some(),
        "fixture request"
    );

    let mut response = Response::new(Full::new(Bytes::new()));

    if let Some(raw) = set {
        for line in CookieLines::decode(&raw) {
            append_set_cookie(&mut response, &line);
        }
    } else if let Some(raw) = drop_lines {
        for line in CookieLines::decode(&raw) {
            // Re-emitting the full line keeps the original Path attribute,
            // so the expiry lands on the same stored cookie.
            let expired = format!(
                "{}; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0",
                line
            );
            append_set_cookie(&mut response, &expired);
        }
    }

    if let Some(target) = location {
        match HeaderValue::from_str(&target) {
            Ok(value) => {
                *response.status_mut() = StatusCode::FOUND;
                response.headers_mut().insert(LOCATION, value);
            }
            Err(_) => {
                tracing::warn!(location = %target, "unusable Location value dropped");
            }
        }
    }

    Ok(response)
}

fn append_set_cookie(response: &mut Response<Full<Bytes>>, line: &str) {
    match HeaderValue::from_str(line) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(_) => {
            // Header transport cannot carry this line (control bytes);
            // the DOM-direct path exists for exactly these cases.
            tracing::warn!("Set-Cookie line not representable as a header value");
        }
    }
}
