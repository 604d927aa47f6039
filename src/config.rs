use std::{env, fmt::Display, time::Duration};

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.cbnucoop.com/service/restaurant/";
pub const DEFAULT_ROOT_ELEMENT_ID: &str = "menu-result";
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4758.102 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// weekly menu page, the `week` parameter is appended per query
    pub base_url: Url,
    /// element that only exists once the menu tables are rendered
    pub root_element_id: String,
    pub render_timeout: Duration,
    pub poll_interval: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url should be valid"),
            root_element_id: DEFAULT_ROOT_ELEMENT_ID.to_string(),
            render_timeout: DEFAULT_RENDER_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to the defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(value) = lookup("MENU_BASE_URL") {
            config.base_url =
                Url::parse(&value).map_err(|_| Error::invalid("MENU_BASE_URL", &value))?;
        }
        if let Some(value) = lookup("MENU_ROOT_ELEMENT_ID") {
            config.root_element_id = value;
        }
        if let Some(value) = lookup("MENU_RENDER_TIMEOUT_SECS") {
            config.render_timeout = Duration::from_secs(
                value
                    .parse()
                    .map_err(|_| Error::invalid("MENU_RENDER_TIMEOUT_SECS", &value))?,
            );
        }
        if let Some(value) = lookup("MENU_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(
                value
                    .parse()
                    .map_err(|_| Error::invalid("MENU_POLL_INTERVAL_MS", &value))?,
            );
        }
        if let Some(value) = lookup("MENU_USER_AGENT") {
            config.user_agent = value;
        }
        Ok(config)
    }

    /// Url of the menu page `week_offset` weeks away from the current week.
    pub fn menu_url(&self, week_offset: i64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("week", week_offset.to_string().as_str());
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidValue { key: &'static str, value: String },
}

impl Error {
    fn invalid(key: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.root_element_id, "menu-result");
        assert_eq!(config.render_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MENU_BASE_URL", "http://127.0.0.1:8080/service/restaurant/"),
            ("MENU_RENDER_TIMEOUT_SECS", "3"),
            ("MENU_POLL_INTERVAL_MS", "50"),
            ("MENU_USER_AGENT", "menu-test"),
        ])
        .unwrap();
        assert_eq!(config.base_url.port(), Some(8080));
        assert_eq!(config.render_timeout, Duration::from_secs(3));
        assert_eq!(config.poll_interval, Duration::from_millis(50));
        assert_eq!(config.user_agent, "menu-test");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("MENU_RENDER_TIMEOUT_SECS", "soon")]),
            Err(Error::InvalidValue {
                key: "MENU_RENDER_TIMEOUT_SECS",
                value: "soon".into()
            })
        );
        assert!(config_from(&[("MENU_BASE_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_menu_url() {
        let config = Config::default();
        assert_eq!(
            config.menu_url(0).as_str(),
            "https://www.cbnucoop.com/service/restaurant/?week=0"
        );
        assert_eq!(
            config.menu_url(-2).as_str(),
            "https://www.cbnucoop.com/service/restaurant/?week=-2"
        );
    }
}
