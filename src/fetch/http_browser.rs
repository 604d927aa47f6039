use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use tokio::time::{sleep, timeout};
use url::Url;

use super::{Browser, BrowserOptions, Error};
use crate::static_selector;

/// A [`Browser`] that loads pages over plain HTTP.
///
/// Nothing is executed, so "rendering" means the server response already
/// holds the awaited element. Waiting re-requests the page every
/// `poll_interval` until it does.
#[derive(Debug)]
pub struct HttpBrowser {
    client: Client,
    options: BrowserOptions,
    current: Option<Page>,
    closed: bool,
}

#[derive(Debug)]
struct Page {
    url: Url,
    markup: String,
}

pub fn make_client(options: &BrowserOptions) -> Result<Client, Error> {
    Client::builder()
        .user_agent(options.user_agent.as_str())
        .gzip(true)
        .build()
        .map_err(Error::from)
}

impl HttpBrowser {
    pub fn launch(options: BrowserOptions) -> Result<Self, Error> {
        log::debug!("launching http browser {:?}", options.chrome_args());
        Ok(Self {
            client: make_client(&options)?,
            options,
            current: None,
            closed: false,
        })
    }

    #[cfg(test)]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.closed {
            Err(Error::browser_error("browser session is closed"))
        } else {
            Ok(())
        }
    }

    fn current_page(&self) -> Result<&Page, Error> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::browser_error("no page has been loaded"))
    }

    async fn load(&self, url: &Url) -> Result<String, Error> {
        let start = std::time::Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        log::trace!("loaded {url} in \t {:?}", start.elapsed());
        Ok(text)
    }

    async fn poll_until_present(&mut self, id: &str) -> Result<(), Error> {
        loop {
            let page = self.current_page()?;
            if has_element_with_id(&page.markup, id) {
                return Ok(());
            }
            let url = page.url.clone();
            sleep(self.options.poll_interval).await;
            let markup = self.load(&url).await?;
            self.current = Some(Page { url, markup });
        }
    }
}

fn has_element_with_id(markup: &str, id: &str) -> bool {
    static_selector!(ID_SELECTOR <- "[id]");
    let document = Html::parse_document(markup);
    let found = document
        .select(&ID_SELECTOR)
        .any(|element| element.value().id() == Some(id));
    found
}

impl Browser for HttpBrowser {
    async fn navigate(&mut self, url: &Url) -> Result<(), Error> {
        self.ensure_open()?;
        let markup = self.load(url).await?;
        self.current = Some(Page {
            url: url.clone(),
            markup,
        });
        Ok(())
    }

    async fn wait_for_element(&mut self, id: &str, wait: Duration) -> Result<(), Error> {
        self.ensure_open()?;
        timeout(wait, self.poll_until_present(id))
            .await
            .map_err(|_| Error::RenderTimeout {
                element_id: id.to_string(),
                timeout: wait,
            })?
    }

    async fn markup(&mut self) -> Result<String, Error> {
        self.ensure_open()?;
        Ok(self.current_page()?.markup.clone())
    }

    async fn close(&mut self) -> Result<(), Error> {
        self.current = None;
        self.closed = true;
        Ok(())
    }
}
