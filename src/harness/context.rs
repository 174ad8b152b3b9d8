//! Harness context - central configuration for cookie test cases.

use crate::base::error::HarnessError;
use crate::cookies::jar::{CookieAccess, CookieJar};
use crate::fetch::CookieFetcher;
use crate::server::CookieTestServer;
use std::sync::Arc;

/// Configuration options for a [`CookieHarness`].
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path of the cookie-setting endpoint on the fixture server.
    pub endpoint_path: String,

    /// The default path cookies land on when the endpoint sets them
    /// without an explicit Path attribute.
    pub default_path: String,

    /// Name of the echo page whose path the default-path reader reads at.
    pub echo_page: String,

    /// Path of the top-level test page; direct reads and DOM writes
    /// happen here.
    pub page_path: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            endpoint_path: "/cookies/resources/cookie".to_string(),
            default_path: "/cookies/resources".to_string(),
            echo_page: "echo-cookie".to_string(),
            page_path: "/".to_string(),
        }
    }
}

/// Central context for cookie test cases.
///
/// Bundles together:
/// - the cookie store (behind the [`CookieAccess`] seam)
/// - the loopback fixture server
/// - the jar-aware fetcher
pub struct CookieHarness {
    store: Arc<dyn CookieAccess>,
    fetcher: CookieFetcher,
    server: CookieTestServer,
    config: HarnessConfig,
}

impl CookieHarness {
    /// Start a harness with default configuration.
    pub async fn start() -> Result<Self, HarnessError> {
        Self::with_config(HarnessConfig::default()).await
    }

    /// Start a harness with custom configuration.
    pub async fn with_config(config: HarnessConfig) -> Result<Self, HarnessError> {
        let store: Arc<dyn CookieAccess> = Arc::new(CookieJar::new());
        Self::with_store(config, store).await
    }

    /// Start a harness against an injected cookie store.
    pub async fn with_store(
        config: HarnessConfig,
        store: Arc<dyn CookieAccess>,
    ) -> Result<Self, HarnessError> {
        let server = CookieTestServer::start().await?;
        let fetcher = CookieFetcher::new(store.clone());
        Ok(Self {
            store,
            fetcher,
            server,
            config,
        })
    }

    /// Get the cookie store.
    pub fn store(&self) -> &Arc<dyn CookieAccess> {
        &self.store
    }

    /// Get the fixture server.
    pub fn server(&self) -> &CookieTestServer {
        &self.server
    }

    /// Get the fetcher.
    pub fn fetcher(&self) -> &CookieFetcher {
        &self.fetcher
    }

    /// Get the configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}
