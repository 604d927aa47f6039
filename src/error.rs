use crate::{config, date, fetch::CrawlError};
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Date(date::Error),
    Crawl(CrawlError),
    Config(config::Error),
    Json(serde_json::Error),
}

impl From<date::Error> for Error {
    fn from(e: date::Error) -> Self {
        Self::Date(e)
    }
}

impl From<CrawlError> for Error {
    fn from(e: CrawlError) -> Self {
        Self::Crawl(e)
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Self::Config(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(e) => write!(f, "Date error: {e}"),
            Self::Crawl(e) => write!(f, "Crawl error: {e}"),
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
