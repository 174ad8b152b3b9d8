use crate::base::error::HarnessError;
use crate::cookies::jar::CookieAccess;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// The two requests a relay answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCommand {
    /// Read all cookies visible at the relay's path, delete all cookies,
    /// reply with the string that was read.
    GetAndExpire,
    /// Delete all cookies, reply with an empty string.
    Expire,
}

/// Reply sent back for every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub cookies: String,
}

struct RelayRequest {
    command: RelayCommand,
    reply: oneshot::Sender<RelayReply>,
}

/// Client handle to a spawned relay.
///
/// One handle serves one exchange at a time; there is no correlation id,
/// so callers must not interleave requests from multiple tasks against
/// the same store. No caller identity check is performed; both ends are
/// harness fixtures.
pub struct RelayHandle {
    tx: mpsc::Sender<RelayRequest>,
}

impl RelayHandle {
    /// Spawn a relay task bound to `store`, answering for cookies visible
    /// at `path`. The task ends when the handle is dropped.
    pub fn spawn(store: Arc<dyn CookieAccess>, path: impl Into<String>) -> Self {
        let path = path.into();
        let (tx, mut rx) = mpsc::channel::<RelayRequest>(1);

        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let reply = match request.command {
                    RelayCommand::GetAndExpire => {
                        let cookies = store.cookie_string_for_path(&path);
                        store.delete_all();
                        tracing::debug!(path = %path, cookies = %cookies, "relay get-and-expire");
                        RelayReply { cookies }
                    }
                    RelayCommand::Expire => {
                        store.delete_all();
                        tracing::debug!(path = %path, "relay expire");
                        RelayReply {
                            cookies: String::new(),
                        }
                    }
                };
                // A dropped receiver just ends that exchange.
                let _ = request.reply.send(reply);
            }
        });

        Self { tx }
    }

    async fn request(&self, command: RelayCommand) -> Result<RelayReply, HarnessError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(RelayRequest {
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| HarnessError::RelayClosed)?;
        reply_rx.await.map_err(|_| HarnessError::RelayClosed)
    }

    /// Read and clear the cookies visible at the relay's path.
    pub async fn get_and_expire(&self) -> Result<String, HarnessError> {
        Ok(self.request(RelayCommand::GetAndExpire).await?.cookies)
    }

    /// Clear all cookies.
    pub async fn expire(&self) -> Result<(), HarnessError> {
        self.request(RelayCommand::Expire).await?;
        Ok(())
    }
}
