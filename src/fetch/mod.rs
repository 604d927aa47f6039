mod browser;
mod error;
mod http_browser;

use chrono::NaiveDate;
use scraper::Html;
use tracing::{instrument, Level};
use url::Url;

pub use browser::{Browser, BrowserOptions};
pub use error::{CrawlError, Error};
pub use http_browser::HttpBrowser;

use crate::assemble::assemble;
use crate::config::Config;
use crate::date::resolve_week_offset;
use crate::menu::RestaurantMenuResult;
use crate::parse::extract_menus;

/// Fetches and parses the menus of every restaurant on `target`, using a
/// fresh [`HttpBrowser`] session.
pub async fn fetch_menu(
    config: &Config,
    target: NaiveDate,
    today: NaiveDate,
) -> Result<RestaurantMenuResult, CrawlError> {
    let mut browser = HttpBrowser::launch(BrowserOptions::from(config)).map_err(|kind| {
        CrawlError::new(kind, config.menu_url(resolve_week_offset(target, today)))
    })?;
    fetch_menu_with(&mut browser, config, target, today).await
}

/// Same as [`fetch_menu`] on a caller supplied session. The session is closed
/// before returning, whatever the outcome.
#[instrument(skip_all, fields(%target, %today), level = Level::DEBUG)]
pub async fn fetch_menu_with<B: Browser>(
    browser: &mut B,
    config: &Config,
    target: NaiveDate,
    today: NaiveDate,
) -> Result<RestaurantMenuResult, CrawlError> {
    let week_offset = resolve_week_offset(target, today);
    let url = config.menu_url(week_offset);
    log::info!("crawling menu for {target} (week offset {week_offset}): {url}");

    let rendered = render(browser, config, &url).await;
    if let Err(e) = browser.close().await {
        tracing::warn!("Error while closing browser: {e}");
    }
    let markup = rendered.map_err(|kind| {
        log::warn!("crawl failed ({url}): {kind}");
        CrawlError::new(kind, url.clone())
    })?;

    let page = Html::parse_document(&markup);
    let meals = extract_menus(&page, target);
    log::info!("crawl done, {} meals found at {url}", meals.len());
    Ok(assemble(&meals, target))
}

async fn render<B: Browser>(browser: &mut B, config: &Config, url: &Url) -> Result<String, Error> {
    browser.navigate(url).await?;
    browser
        .wait_for_element(&config.root_element_id, config.render_timeout)
        .await?;
    browser.markup().await
}
