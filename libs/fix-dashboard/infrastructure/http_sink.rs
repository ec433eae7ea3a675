//! Fire-and-forget command submission over HTTP

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use crate::application::CommandSink;

/// JSON body of a command request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// Posts each command on a spawned task; the response is only logged
pub struct HttpCommandSink {
    client: reqwest::Client,
    endpoint: Url,
    runtime: Handle,
}

impl HttpCommandSink {
    pub fn new(endpoint: Url, runtime: Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            runtime,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CommandSink for HttpCommandSink {
    fn emit(&self, command: String) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        self.runtime.spawn(async move {
            let body = CommandRequest { command };
            match client.post(endpoint).json(&body).send().await {
                Ok(response) => {
                    debug!("Command '{}' posted: {}", body.command, response.status());
                }
                Err(e) => {
                    warn!("Command '{}' not delivered: {}", body.command, e);
                }
            }
        });
    }
}
