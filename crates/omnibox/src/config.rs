use crate::error::ConfigError;
use serde::Deserialize;

pub const DEFAULT_SEARCH_LABEL: &str = "DuckDuckGo Search";
pub const DEFAULT_SEARCH_URL: &str = "https://duckduckgo.com/?q=";

/// Web search used for the "search" row of the dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchProvider {
    /// Shown as the title of the search row.
    pub label: String,
    /// Query terms joined with `+` are appended to this.
    pub query_url: String,
}

impl Default for SearchProvider {
    fn default() -> Self {
        Self {
            label: DEFAULT_SEARCH_LABEL.into(),
            query_url: DEFAULT_SEARCH_URL.into(),
        }
    }
}

impl SearchProvider {
    pub fn query_url_for(&self, input: &str) -> String {
        format!("{}{}", self.query_url, input.split(' ').collect::<Vec<_>>().join("+"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OmniboxConfig {
    pub search: SearchProvider,
}

impl OmniboxConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: OmniboxConfig =
            toml::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.query_url.trim().is_empty() {
            return Err(ConfigError::Invalid("search.query_url must not be empty"));
        }
        Ok(())
    }
}
