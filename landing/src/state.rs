//! Shared view, language and configuration state.

use leptos::prelude::*;
use lingup_core::config::SiteConfig;
use lingup_core::{Language, View, i18n};

use crate::api::Api;

#[derive(Clone, Copy)]
pub struct AppState {
    pub view: RwSignal<View>,
    pub language: RwSignal<Language>,
    pub config: StoredValue<SiteConfig>,
}

impl AppState {
    pub fn new() -> Self {
        let config = SiteConfig::load_embedded(include_str!("../lingup.toml"))
            .with_api_base(option_env!("LINGUP_API_BASE"));
        tracing::info!("api base: {:?}", config.api.base_url);

        Self {
            view: RwSignal::new(View::default()),
            language: RwSignal::new(Language::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> Api {
        Api::new(self.config.with_value(|c| c.api.clone()))
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Reactive translator for the current language.
pub fn use_tr() -> impl Fn(&'static str) -> &'static str + Copy + Send + Sync + 'static {
    let language = use_app_state().language;
    move |key| i18n::t(language.get(), key)
}
