use std::{fmt::Display, time::Duration};

use url::Url;

/// What went wrong while driving the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    RenderTimeout {
        element_id: String,
        timeout: Duration,
    },
    Request(String),
    Browser(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.to_string())
    }
}

impl Error {
    pub fn browser_error(msg: &str) -> Self {
        Self::Browser(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RenderTimeout {
                element_id,
                timeout,
            } => write!(
                f,
                "#{element_id} did not appear within {}s",
                timeout.as_secs_f32()
            ),
            Self::Request(msg) => write!(f, "HTTP Request Error: {msg}"),
            Self::Browser(msg) => write!(f, "Browser Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// A failed menu crawl, with the page it was attempting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlError {
    kind: Error,
    url: Url,
}

impl CrawlError {
    pub const fn new(kind: Error, url: Url) -> Self {
        Self { kind, url }
    }

    pub const fn kind(&self) -> &Error {
        &self.kind
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn is_timeout(&self) -> bool {
        matches!(self.kind, Error::RenderTimeout { .. })
    }
}

impl Display for CrawlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "크롤링 중 오류 발생: {} (URL: {})", self.kind, self.url)
    }
}

impl std::error::Error for CrawlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
