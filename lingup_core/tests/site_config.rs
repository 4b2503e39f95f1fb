//! The configuration shipped with the landing crate must parse cleanly.

use lingup_core::config::SiteConfig;
use pretty_assertions::assert_eq;

const SHIPPED: &str = include_str!("../../landing/lingup.toml");

#[test]
fn shipped_config_matches_defaults() {
    let parsed = SiteConfig::from_toml_str(SHIPPED).expect("landing/lingup.toml parses");
    assert_eq!(parsed, SiteConfig::default());
}

#[test]
fn dev_override_points_at_the_proxy() {
    let config = SiteConfig::load_embedded(SHIPPED).with_api_base(Some(""));
    assert_eq!(config.api.url("/api/price_list/"), "/api/price_list/");
}
