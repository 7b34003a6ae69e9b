use super::models::SchemeResponse;
use super::FetchError;
use crate::config::ApiConfig;
use anyhow::Context;
use std::time::Duration;

/// Palette size when the caller has no preference.
pub const DEFAULT_COUNT: u32 = 5;

/// The Color API client
#[derive(Debug, Clone)]
pub struct ColorApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ColorApiClient {
    const USER_AGENT: &'static str = concat!("swatchbook/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(Self::USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build().context("build reqwest client")?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &ApiConfig) -> anyhow::Result<Self> {
        Self::new(&cfg.base_url, cfg.timeout_secs.map(Duration::from_secs))
    }

    /// `/scheme` URL with parameters in `mode`, `count`, `hex` order.
    pub fn scheme_url(&self, seed_color: &str, mode: &str, count: u32) -> String {
        format!(
            "{}/scheme?mode={}&count={}&hex={}",
            self.base_url,
            urlencoding::encode(mode),
            count,
            urlencoding::encode(seed_color)
        )
    }

    /// Fetch a palette generated from `seed_color` (no leading `#`).
    ///
    /// Returns one hex string per color, in the order the service lists them.
    pub async fn fetch_palette(
        &self,
        seed_color: &str,
        mode: &str,
        count: u32,
    ) -> Result<Vec<String>, FetchError> {
        let url = self.scheme_url(seed_color, mode, count);
        tracing::debug!(%url, "requesting color scheme");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let scheme: SchemeResponse = serde_json::from_str(&body)?;
        Ok(scheme.hex_values())
    }
}
