use leptos::prelude::*;

use crate::dom;
use crate::state::use_tr;

#[component]
pub fn Hero() -> impl IntoView {
    let tr = use_tr();

    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {move || tr("hero_badge")}
                        </div>
                        <h1 class="hero-title">
                            {move || tr("hero_title")}
                            <br />
                            <span class="hero-title-accent">{move || tr("hero_title_accent")}</span>
                        </h1>
                        <p class="hero-description">{move || tr("hero_description")}</p>
                        <div class="hero-actions">
                            <button class="btn btn-primary" on:click=move |_| dom::scroll_to_section("courses")>
                                {move || tr("hero_cta")}
                            </button>
                            <button class="btn btn-secondary" on:click=move |_| dom::scroll_to_section("results")>
                                {move || tr("hero_secondary_cta")}
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img src="assets/hero.webp" alt="LingUp students" />
                    </div>
                </div>
            </div>
        </section>
    }
}
