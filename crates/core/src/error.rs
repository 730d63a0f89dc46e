use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid delay seconds: {input}")]
    InvalidDelay { input: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("control endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },
}
