use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Not enough memory to buffer the response")]
    OutOfMemory,

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{0}` in response")]
    MissingKey(&'static str),

    #[error("Missing field `{field}` on item {index}")]
    MissingField { field: String, index: usize },

    #[error("Requested {limit} items but only {len} are available")]
    OutOfBounds { limit: usize, len: usize },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
