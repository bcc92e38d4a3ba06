use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the blog fetch path. Every variant is classified as
/// either retriable (transient network conditions) or fatal (the URL or the
/// document itself is unusable, so retrying cannot help).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("http status {status}")]
    Http {
        status: StatusCode,
        retriable: bool,
    },

    #[error("body of {actual} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { actual: u64, limit: u64 },

    #[error("not an html page: {0}")]
    UnsupportedContentType(String),

    #[error("charset decode failed: {0}")]
    Charset(String),

    #[error("body read failed: {0}")]
    Body(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Whether another attempt at the same URL could plausibly succeed.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::InvalidUrl(_) => false,
            Self::BodyTooLarge { .. } => false,
            Self::UnsupportedContentType(_) => false,
            Self::Charset(_) => false,
            Self::Http { retriable, .. } => *retriable,

            Self::Connect(_) => true,
            Self::ConnectTimeout => true,
            Self::RequestTimeout => true,
            Self::RedirectLoop => true,
            Self::Body(_) => true,
            Self::Transport(_) => true,
        }
    }

    /// Classify a transport-level reqwest failure. Status errors never reach
    /// this point; the client checks the status itself before reading the
    /// body.
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::Http {
                status,
                retriable: status.is_server_error(),
            }
        } else if err.is_connect() || err.is_request() {
            // DNS resolution and refused connections land here
            Self::Connect(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
