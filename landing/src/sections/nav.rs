use leptos::prelude::*;
use lingup_core::Language;
use lingup_core::content::NAV_SECTIONS;

use crate::dom;
use crate::state::{use_app_state, use_tr};

#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let (menu_open, set_menu_open) = signal(false);

    // Body scroll stays locked only while the mobile drawer is open.
    Effect::new(move || dom::set_body_scroll_locked(menu_open.get()));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let go_to = move |id: &'static str| {
        set_menu_open.set(false);
        dom::scroll_to_section(id);
    };

    let on_language = move |ev| {
        let lang = Language::from_tag(&event_target_value(&ev));
        tracing::debug!("language -> {}", lang.code());
        state.language.set(lang);
    };

    let links = move || {
        NAV_SECTIONS
            .iter()
            .map(|&(id, key)| {
                view! {
                    <button class="nav-link" on:click=move |_| go_to(id)>
                        {move || tr(key)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| go_to("hero")>
                    <img class="nav-logo" src="assets/logo.svg" alt="LingUp" />
                    <span class="nav-title">"LingUp"</span>
                </button>

                <nav class="nav-links">{links}</nav>

                <div class="nav-actions">
                    <select
                        class="nav-language"
                        prop:value=move || state.language.get().code()
                        on:change=on_language
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|lang| view! { <option value=lang.code()>{lang.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="nav-cta" on:click=move |_| go_to("courses")>
                        {move || tr("start_learning")}
                    </button>
                    <button
                        class=move || if menu_open.get() { "nav-burger active" } else { "nav-burger" }
                        aria-label=move || tr("toggle_menu")
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {links}
                        <button class="btn btn-primary" on:click=move |_| go_to("courses")>
                            {move || tr("start_learning")}
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
