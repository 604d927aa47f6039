use std::{future::Future, time::Duration};

use url::Url;

use super::Error;
use crate::config::Config;

/// The part of a browser automation session the crawler needs.
///
/// A session serves a single query. Callers must `close` it on every path,
/// including after a failed `navigate` or `wait_for_element`.
pub trait Browser: Send {
    fn navigate(&mut self, url: &Url) -> impl Future<Output = Result<(), Error>> + Send;

    /// Resolves once an element with `id` is present in the current page, or
    /// fails with [`Error::RenderTimeout`] after `timeout`.
    fn wait_for_element(
        &mut self,
        id: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Markup of the current page as rendered so far.
    fn markup(&mut self) -> impl Future<Output = Result<String, Error>> + Send;

    fn close(&mut self) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Launch settings shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    pub sandbox: bool,
    pub shared_memory: bool,
    pub gpu: bool,
    pub user_agent: String,
    pub poll_interval: Duration,
}

impl BrowserOptions {
    /// Command line flags for a chromium based driver.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(5);
        if self.headless {
            args.push("--headless".to_string());
        }
        if !self.sandbox {
            args.push("--no-sandbox".to_string());
        }
        if !self.shared_memory {
            args.push("--disable-dev-shm-usage".to_string());
        }
        if !self.gpu {
            args.push("--disable-gpu".to_string());
        }
        args.push(format!("user-agent={}", self.user_agent));
        args
    }
}

impl From<&Config> for BrowserOptions {
    fn from(config: &Config) -> Self {
        Self {
            headless: true,
            sandbox: false,
            shared_memory: false,
            gpu: false,
            user_agent: config.user_agent.clone(),
            poll_interval: config.poll_interval,
        }
    }
}
