#[cfg(test)]
#[path = "sathi_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AssistantBackend;
use crate::domain::models::ChatExchange;
use crate::domain::models::DocumentAnalysis;
use crate::domain::models::SessionError;
use crate::domain::models::Turn;

const DEFAULT_TIMEOUT_MS: u64 = 30000;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
    history: Vec<Turn>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatResponse {
    pub response: String,
    pub history: Vec<Turn>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UploadResponse {
    pub filename: String,
    pub analysis: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    pub error: String,
}

async fn to_service_error(res: reqwest::Response) -> SessionError {
    let status = res.status().as_u16();
    match res.json::<ErrorResponse>().await {
        Ok(body) => {
            tracing::error!(status = status, error = body.error, "Server reported an error");
            return SessionError::Service(body.error);
        }
        Err(err) => {
            tracing::error!(status = status, error = ?err, "Server returned an unreadable error");
            return SessionError::Transport;
        }
    }
}

pub struct Sathi {
    url: String,
    timeout: Duration,
}

impl Default for Sathi {
    fn default() -> Sathi {
        let timeout_ms = Config::get(ConfigKey::RequestTimeout)
            .parse::<u64>()
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        return Sathi {
            url: Config::get(ConfigKey::ServerUrl),
            timeout: Duration::from_millis(timeout_ms),
        };
    }
}

impl Sathi {
    pub fn with_url(url: String) -> Sathi {
        return Sathi {
            url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };
    }
}

#[async_trait]
impl AssistantBackend for Sathi {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "SATHI server is not running");
            bail!("SATHI server is not running");
        }

        let res = res.unwrap();
        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "SATHI health check failed");
            bail!("SATHI health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, message: &str, history: &[Turn]) -> Result<ChatExchange, SessionError> {
        let req = ChatRequest {
            message: message.to_string(),
            history: history.to_vec(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/chat", url = self.url))
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Failed to make chat request to SATHI");
                return Err(SessionError::Transport);
            }
        };

        if !res.status().is_success() {
            return Err(to_service_error(res).await);
        }

        match res.json::<ChatResponse>().await {
            Ok(body) => {
                tracing::debug!(body = ?body, "Chat response");
                return Ok(ChatExchange {
                    reply: body.response,
                    history: body.history,
                });
            }
            Err(err) => {
                tracing::error!(error = ?err, "Chat response could not be parsed");
                return Err(SessionError::Transport);
            }
        }
    }

    #[allow(clippy::implicit_return)]
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentAnalysis, SessionError> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let res = reqwest::Client::new()
            .post(format!("{url}/upload", url = self.url))
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Failed to make upload request to SATHI");
                return Err(SessionError::Transport);
            }
        };

        if !res.status().is_success() {
            return Err(to_service_error(res).await);
        }

        match res.json::<UploadResponse>().await {
            Ok(body) => {
                tracing::debug!(body = ?body, "Upload response");
                return Ok(DocumentAnalysis {
                    filename: body.filename,
                    analysis: body.analysis,
                });
            }
            Err(err) => {
                tracing::error!(error = ?err, "Upload response could not be parsed");
                return Err(SessionError::Transport);
            }
        }
    }
}
