use {obra_session::StoreError, reqwest::StatusCode, thiserror::Error};

/// Failures surfaced by gateway calls.
///
/// Nothing here is retried or recovered internally; callers decide whether
/// to show a message, re-login, or give up.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure before a response was obtained.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the stored token. The session has already been
    /// cleared by the time this surfaces.
    #[error("{message}")]
    AuthExpired { message: String },

    /// Any other non-2xx response, carrying the server-supplied detail.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The response body did not match the expected shape.
    #[error("parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// Session persistence failed.
    #[error("session store: {0}")]
    Session(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
