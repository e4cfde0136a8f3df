use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The fetch itself rejected (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a body we could not decode.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid board config: {0}")]
    Config(String),
}

impl From<gloo_net::Error> for BoardError {
    fn from(e: gloo_net::Error) -> Self {
        BoardError::Transport(e.to_string())
    }
}
