//! Site configuration.
//!
//! The landing crate embeds `lingup.toml` at build time and hands it to
//! [`SiteConfig::load_embedded`]. Every section is optional; missing keys
//! take the defaults below.

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub timer: TimerConfig,
    pub order: OrderConfig,
    pub pricing: PricingConfig,
    pub course_stats: CourseStats,
}

/// Backend location and request budget
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are appended to. Empty means same origin
    /// (the dev server proxies `/api`).
    pub base_url: String,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.lingup.uz".into(),
            request_timeout_ms: 15_000,
        }
    }
}

impl ApiConfig {
    /// Join `base_url` and an endpoint path without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Contact-section countdown cadence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Local decrement interval.
    pub tick_ms: u64,
    /// How often the server value is re-fetched to correct drift.
    pub resync_secs: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1_000,
            resync_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Length of the payment window countdown on the order page.
    pub payment_window_secs: i64,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            payment_window_secs: 15 * 60,
        }
    }
}

/// Price rendering and the anchor ("was") prices shown on course cards
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Appended directly to every rendered amount.
    pub currency_suffix: String,
    /// Struck-through price per plan order. Business data, not from the API.
    pub original_prices: Vec<OriginalPrice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OriginalPrice {
    pub order: i64,
    pub amount: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_suffix: "sum".into(),
            original_prices: vec![
                OriginalPrice { order: 1, amount: 1_180_000 },
                OriginalPrice { order: 2, amount: 1_780_000 },
                OriginalPrice { order: 3, amount: 2_580_000 },
            ],
        }
    }
}

impl PricingConfig {
    pub fn original_price(&self, order: i64) -> Option<u64> {
        self.original_prices
            .iter()
            .find(|p| p.order == order)
            .map(|p| p.amount)
    }
}

/// Static badges shown on every course card
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CourseStats {
    pub duration: String,
    pub lessons: String,
    pub students: String,
}

impl Default for CourseStats {
    fn default() -> Self {
        Self {
            duration: "10 weeks".into(),
            lessons: "40 lessons".into(),
            students: "5000+".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse the embedded config, falling back to defaults when it is invalid.
    pub fn load_embedded(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    /// Apply a build-time `LINGUP_API_BASE` override.
    pub fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base {
            self.api.base_url = base.trim().to_owned();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api.base_url, "https://api.lingup.uz");
        assert_eq!(config.timer.resync_secs, 30);
        assert_eq!(config.order.payment_window_secs, 900);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://staging.lingup.uz/"

            [[pricing.original_prices]]
            order = 1
            amount = 990000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.request_timeout_ms, 15_000);
        assert_eq!(config.pricing.currency_suffix, "sum");
        assert_eq!(config.pricing.original_price(1), Some(990_000));
        assert_eq!(config.pricing.original_price(2), None);
        assert_eq!(
            config.api.url("/api/skill/"),
            "https://staging.lingup.uz/api/skill/"
        );
    }

    #[test]
    fn invalid_document_is_an_error_but_embedded_load_recovers() {
        let broken = "[api\nbase_url = ";
        assert!(SiteConfig::from_toml_str(broken).is_err());
        assert_eq!(SiteConfig::load_embedded(broken), SiteConfig::default());
    }

    #[test]
    fn empty_base_means_same_origin() {
        let config = SiteConfig::default().with_api_base(Some(""));
        assert_eq!(config.api.url("/api/contact/"), "/api/contact/");
        let untouched = SiteConfig::default().with_api_base(None);
        assert_eq!(untouched.api.base_url, "https://api.lingup.uz");
    }

    #[test]
    fn default_anchor_prices_cover_three_plans() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.original_price(1), Some(1_180_000));
        assert_eq!(pricing.original_price(2), Some(1_780_000));
        assert_eq!(pricing.original_price(3), Some(2_580_000));
        assert_eq!(pricing.original_price(4), None);
    }
}
