use leptos::prelude::*;
use lingup_core::content::STATS;

use crate::state::use_tr;

#[component]
pub fn Stats() -> impl IntoView {
    let tr = use_tr();

    view! {
        <section class="stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|&(value, key)| {
                        view! {
                            <div class="stat">
                                <span class="stat-value">{value}</span>
                                <span class="stat-label">{move || tr(key)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
