//! Provider configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use seolens_core::{Error, Result};

pub const DEFAULT_TEXTRAZOR_URL: &str = "https://api.textrazor.com";
pub const DEFAULT_SEO_KEYWORD_URL: &str = "https://seo-keyword-research.p.rapidapi.com";
pub const DEFAULT_API_NINJAS_URL: &str = "https://api.api-ninjas.com";
pub const DEFAULT_PARAPHRASE_URL: &str =
    "https://quillbot-alternative-advanced-paraphrasing.p.rapidapi.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential and location of one external endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// `None` when no credential was configured; calls then fail closed
    pub api_key: Option<String>,
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_key: None,
            base_url: base_url.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Host name of the base URL, as RapidAPI expects in `x-rapidapi-host`
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Configuration for every capability adapter.
///
/// Built once at start-up and handed to each adapter constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub textrazor: EndpointConfig,
    pub seo_keywords: EndpointConfig,
    pub api_ninjas: EndpointConfig,
    pub paraphrase: EndpointConfig,
    /// Market the keyword research is run against
    pub keyword_country: String,
    pub paraphrase_language: String,
    pub paraphrase_mode: String,
    pub request_timeout: Duration,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            textrazor: EndpointConfig::new(DEFAULT_TEXTRAZOR_URL),
            seo_keywords: EndpointConfig::new(DEFAULT_SEO_KEYWORD_URL),
            api_ninjas: EndpointConfig::new(DEFAULT_API_NINJAS_URL),
            paraphrase: EndpointConfig::new(DEFAULT_PARAPHRASE_URL),
            keyword_country: "us".to_string(),
            paraphrase_language: "English".to_string(),
            paraphrase_mode: "standard".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProvidersConfig {
    /// Create configuration from a key lookup, usually the process environment.
    ///
    /// Blank values are treated as unset. Missing credentials are not an
    /// error; an unparsable timeout is.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let endpoint = |key_var: &str, url_var: &str, default_url: &str| EndpointConfig {
            api_key: get(key_var),
            base_url: get(url_var).unwrap_or_else(|| default_url.to_string()),
        };

        let defaults = Self::default();

        let request_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    Error::Configuration(format!(
                        "PROVIDER_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            textrazor: endpoint("TEXTRAZOR_API_KEY", "TEXTRAZOR_API_URL", DEFAULT_TEXTRAZOR_URL),
            seo_keywords: endpoint("RAPIDAPI_SEO_KEY", "SEO_KEYWORD_API_URL", DEFAULT_SEO_KEYWORD_URL),
            api_ninjas: endpoint("API_NINJAS_KEY", "API_NINJAS_API_URL", DEFAULT_API_NINJAS_URL),
            paraphrase: endpoint("QUILLBOT_ALT_API_KEY", "PARAPHRASE_API_URL", DEFAULT_PARAPHRASE_URL),
            keyword_country: get("SEO_KEYWORD_COUNTRY").unwrap_or(defaults.keyword_country),
            paraphrase_language: get("PARAPHRASE_LANGUAGE").unwrap_or(defaults.paraphrase_language),
            paraphrase_mode: get("PARAPHRASE_MODE").unwrap_or(defaults.paraphrase_mode),
            request_timeout,
        })
    }

    /// Names of the capabilities that have no credential and will fail closed
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("topic extraction (TEXTRAZOR_API_KEY)", &self.textrazor),
            ("keyword suggestions (RAPIDAPI_SEO_KEY)", &self.seo_keywords),
            ("sentiment and similarity (API_NINJAS_KEY)", &self.api_ninjas),
            ("paraphrasing (QUILLBOT_ALT_API_KEY)", &self.paraphrase),
        ]
        .into_iter()
        .filter(|(_, endpoint)| endpoint.api_key.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = ProvidersConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ProvidersConfig::default());
        assert_eq!(config.missing_credentials().len(), 4);
    }

    #[test]
    fn test_credentials_and_overrides() {
        let config = ProvidersConfig::from_lookup(lookup(&[
            ("TEXTRAZOR_API_KEY", "tr-key"),
            ("API_NINJAS_KEY", "ninja-key"),
            ("API_NINJAS_API_URL", "http://127.0.0.1:9000"),
            ("SEO_KEYWORD_COUNTRY", "uk"),
            ("PROVIDER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.textrazor.api_key.as_deref(), Some("tr-key"));
        assert_eq!(config.api_ninjas.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.keyword_country, "uk");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.missing_credentials(),
            vec![
                "keyword suggestions (RAPIDAPI_SEO_KEY)",
                "paraphrasing (QUILLBOT_ALT_API_KEY)",
            ]
        );
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let config =
            ProvidersConfig::from_lookup(lookup(&[("QUILLBOT_ALT_API_KEY", "   ")])).unwrap();
        assert!(config.paraphrase.api_key.is_none());
    }

    #[test]
    fn test_invalid_timeout_is_configuration_error() {
        let err = ProvidersConfig::from_lookup(lookup(&[("PROVIDER_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_endpoint_host() {
        let endpoint = EndpointConfig::new(DEFAULT_SEO_KEYWORD_URL);
        assert_eq!(
            endpoint.host().as_deref(),
            Some("seo-keyword-research.p.rapidapi.com")
        );
        assert_eq!(EndpointConfig::new("not a url").host(), None);
    }
}
