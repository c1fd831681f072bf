use thiserror::Error;

/// Failures surfaced by the conversation session. All of them are returned
/// as values at the session boundary and leave the session usable again.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The message was empty after trimming. Detected locally, no request
    /// is issued.
    #[error("Message is empty")]
    EmptyMessage,

    /// The attachment exceeds the upload limit. Detected locally, no
    /// request is issued.
    #[error("File size exceeds the {limit} byte limit ({size} bytes)")]
    FileTooLarge { size: usize, limit: usize },

    /// A request is already in flight for this session.
    #[error("A request is already in progress")]
    Busy,

    /// The service answered with a non-2xx status and its own error
    /// message, surfaced verbatim.
    #[error("{0}")]
    Service(String),

    /// The service could not be reached, or its response could not be
    /// understood.
    #[error("Sorry, there was an error connecting to the server")]
    Transport,
}
