use anyhow::Result;
use async_trait::async_trait;

use super::SessionError;
use super::Turn;

/// A completed chat exchange: the assistant's reply, plus the service's
/// authoritative copy of the conversation history including both new turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatExchange {
    pub reply: String,
    pub history: Vec<Turn>,
}

/// Result of asking the service to analyze an uploaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAnalysis {
    pub filename: String,
    pub analysis: String,
}

#[async_trait]
pub trait AssistantBackend {
    /// Used at startup to verify the service is reachable before starting a
    /// conversation.
    async fn health_check(&self) -> Result<()>;

    /// Sends one user message and awaits the assistant's reply.
    ///
    /// `history` is the conversation state from before this message; the
    /// message itself travels only in `message`. The service appends both
    /// the user turn and its reply to the history it returns, so the
    /// returned history supersedes whatever the caller holds.
    async fn chat(&self, message: &str, history: &[Turn]) -> Result<ChatExchange, SessionError>;

    /// Uploads one document for analysis and awaits the result.
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentAnalysis, SessionError>;
}

pub type BackendBox = Box<dyn AssistantBackend + Send + Sync>;
