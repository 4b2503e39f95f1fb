// LingUp Landing — Leptos 0.8 Edition
// Developed with 💙 by The LingUp Team (c)2025

mod api;
mod dom;
mod pages;
mod sections;
mod state;
mod telemetry;

use leptos::prelude::*;
use lingup_core::View;
use pages::{HomePage, OrderPage, SuccessPage};
use state::AppState;

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    // Every view switch starts at the top of the page.
    Effect::new(move |previous: Option<View>| {
        let current = state.view.get();
        if previous.is_some_and(|p| p != current) {
            tracing::debug!("view -> {current:?}");
            dom::scroll_to_top();
        }
        current
    });

    view! {
        {move || match state.view.get() {
            View::Landing => view! { <HomePage /> }.into_any(),
            View::Order => view! { <OrderPage /> }.into_any(),
            View::Success => view! { <SuccessPage /> }.into_any(),
        }}
    }
}
