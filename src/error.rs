use thiserror::Error;

/// Failure to bind the doodle field to a drawable canvas. Always fatal: the
/// field is never started with a partial surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no browser window")]
    NoWindow,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d context unavailable on #{0}")]
    NoContext(String),
}

/// Failure of a call to the recommendation backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted). Holds
    /// the browser's error message; `Display` adds a prefix for logs.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status. `message` is what the
    /// user sees.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown in the search error panel.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(message) | ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
