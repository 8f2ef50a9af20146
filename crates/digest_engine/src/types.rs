use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::decode::DecodeError;
use crate::links::RewriteError;
use crate::persist::PersistError;

/// One blog post as returned by the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// HTML body with newlines removed.
    pub content: String,
    pub title: String,
    pub published: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Partitioning,
    Rewriting,
    Analyzing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    StageStarted(Stage),
    /// One content API page was received and parsed.
    PageFetched {
        page: usize,
        posts: usize,
        total_posts: usize,
        bytes: usize,
    },
    FileWritten { stage: Stage, path: PathBuf },
}

/// Raw page body and the `Content-Type` header used to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Network-level failure for a single page request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A page was received but its body is not a usable posts page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("page {page}: {source}")]
    Decode {
        page: usize,
        #[source]
        source: DecodeError,
    },
    #[error("page {page}: malformed json: {source}")]
    Json {
        page: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("page {page}: response has no `items` field")]
    MissingItems { page: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("file io failed: {0}")]
    FileIo(#[from] PersistError),
    #[error("link rewrite failed: {0}")]
    Rewrite(#[from] RewriteError),
    #[error("could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
