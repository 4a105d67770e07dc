use thiserror::Error;

/// Failure of one upstream request. The display text is the message surfaced
/// to callers of the search, so it carries the upstream wording verbatim.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("The server responded without a 2XX status code: {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Api(String),
}
