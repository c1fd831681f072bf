#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::domain::models::BackendBox;
use crate::domain::models::DocumentAnalysis;
use crate::domain::models::SessionError;
use crate::domain::models::SessionState;
use crate::domain::models::Turn;

/// Client-enforced attachment cap. Part of the endpoint contract, uploads
/// over this never leave the client.
pub const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Owns the conversation history and the single in-flight request
/// invariant. One logical exchange with the service runs at a time; every
/// call settles back to `Idle` whether it succeeded or not, and every
/// failure comes back as a [`SessionError`] value rather than a panic.
pub struct ConversationSession {
    backend: BackendBox,
    history: Vec<Turn>,
    state: SessionState,
}

impl ConversationSession {
    pub fn new(backend: BackendBox) -> ConversationSession {
        return ConversationSession {
            backend,
            history: vec![],
            state: SessionState::Idle,
        };
    }

    pub fn history(&self) -> &[Turn] {
        return &self.history;
    }

    pub fn state(&self) -> SessionState {
        return self.state;
    }

    /// Sends one user message and returns the assistant's reply.
    ///
    /// The user turn is appended to the history as soon as the request goes
    /// out so observers can render it immediately. On success the service's
    /// returned history replaces the local one wholesale, which lets the
    /// server truncate or summarize as it sees fit. On failure the
    /// optimistic user turn is rolled back, leaving the history exactly as
    /// it was before the call.
    pub async fn send(&mut self, text: &str) -> Result<String, SessionError> {
        let message = text.trim().to_string();
        if message.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        self.begin()?;

        // The wire contract carries the new message in `message` only; the
        // service appends both new turns to the history it echoes back.
        let request_history = self.history.clone();
        self.history.push(Turn::user(&message));

        let res = self.backend.chat(&message, &request_history).await;
        self.state = SessionState::Idle;

        match res {
            Ok(exchange) => {
                self.history = exchange.history;
                return Ok(exchange.reply);
            }
            Err(err) => {
                self.history.pop();
                return Err(err);
            }
        }
    }

    /// Uploads one document for analysis.
    ///
    /// On success two synthetic turns are appended, mirroring how the
    /// exchange would have read as a chat, so follow-up `send` calls carry
    /// a consistent history. On failure the history is untouched.
    pub async fn send_attachment(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentAnalysis, SessionError> {
        if bytes.len() > UPLOAD_LIMIT_BYTES {
            return Err(SessionError::FileTooLarge {
                size: bytes.len(),
                limit: UPLOAD_LIMIT_BYTES,
            });
        }
        self.begin()?;

        let res = self.backend.upload(filename, bytes).await;
        self.state = SessionState::Idle;

        match res {
            Ok(analysis) => {
                self.history.push(Turn::user(&format!(
                    "Please analyze this document: {}",
                    analysis.filename
                )));
                self.history.push(Turn::assistant(&analysis.analysis));
                return Ok(analysis);
            }
            Err(err) => {
                return Err(err);
            }
        }
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Pending {
            return Err(SessionError::Busy);
        }
        self.state = SessionState::Pending;
        return Ok(());
    }
}
