use leptos::prelude::*;
use lingup_core::content::{NAV_SECTIONS, PHONE_DISPLAY, PHONE_HREF, SOCIAL_LINKS, SUPPORT_EMAIL, TELEGRAM_HANDLE, TELEGRAM_URL};

use crate::dom;
use crate::state::use_tr;

#[component]
pub fn Footer() -> impl IntoView {
    let tr = use_tr();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src="assets/logo.svg" alt="LingUp" />
                    </span>
                    <span class="footer-title">"LingUp"</span>
                    <p class="footer-tagline">{move || tr("empowering")}</p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|&(label, url)| view! {
                                <a href=url target="_blank" rel="noopener" class="footer-link">{label}</a>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-column">
                    <h4>{move || tr("footer_courses")}</h4>
                    <button class="footer-link" on:click=move |_| dom::scroll_to_section("courses")>
                        {move || tr("nav_courses")}
                    </button>
                </div>

                <div class="footer-column">
                    <h4>{move || tr("footer_company")}</h4>
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(id, key)| view! {
                            <button class="footer-link" on:click=move |_| dom::scroll_to_section(id)>
                                {move || tr(key)}
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="footer-column">
                    <h4>{move || tr("footer_contact")}</h4>
                    <a href=PHONE_HREF class="footer-link">{PHONE_DISPLAY}</a>
                    <a href=format!("mailto:{SUPPORT_EMAIL}") class="footer-link">{SUPPORT_EMAIL}</a>
                    <a href=TELEGRAM_URL target="_blank" rel="noopener" class="footer-link">{TELEGRAM_HANDLE}</a>
                </div>
            </div>
            <p class="footer-copyright">
                "© 2025 LingUp. " {move || tr("rights_reserved")}
            </p>
        </footer>
    }
}
