// Success page - shown after a payment confirmation is accepted
use crate::state::{use_app_state, use_tr};
use leptos::prelude::*;
use lingup_core::View;
use lingup_core::content::TELEGRAM_URL;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();

    view! {
        <section class="success-page">
            <div class="container success-card">
                <div class="success-icon">"✓"</div>
                <h1 class="page-title">{move || tr("congrats")}</h1>
                <p class="page-description">{move || tr("payment_received")}</p>
                <div class="success-actions">
                    <button class="btn btn-primary" on:click=move |_| state.view.set(View::Landing)>
                        {move || tr("go_home")}
                    </button>
                    <a class="btn btn-secondary" href=TELEGRAM_URL target="_blank" rel="noopener">
                        {move || tr("help_button")}
                    </a>
                </div>
            </div>
        </section>
    }
}
