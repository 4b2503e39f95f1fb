use std::time::Duration;

use leptos::prelude::*;
use lingup_core::carousel::Carousel;
use lingup_core::content::{RESULT_SLIDES, ResultSlide};

use crate::dom;
use crate::state::use_tr;

const AUTOPLAY: Duration = Duration::from_millis(4000);

#[component]
pub fn StudentResults() -> impl IntoView {
    let tr = use_tr();
    let carousel = RwSignal::new(Carousel::new(RESULT_SLIDES.len()));
    let (enlarged, set_enlarged) = signal(None::<ResultSlide>);

    match set_interval_with_handle(move || carousel.update(Carousel::next), AUTOPLAY) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("results autoplay disabled: {e:?}"),
    }

    Effect::new(move || dom::set_body_scroll_locked(enlarged.get().is_some()));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let track_style = move || {
        format!(
            "transform: translateX(-{}%)",
            carousel.with(Carousel::index) * 100
        )
    };

    view! {
        <section id="results" class="results">
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow">{move || tr("results_eyebrow")}</span>
                    <h2 class="section-title">{move || tr("results_title")}</h2>
                    <p class="section-description">{move || tr("results_description")}</p>
                </div>

                <div class="carousel">
                    <button
                        class="carousel-arrow prev"
                        aria-label=move || tr("previous")
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        "‹"
                    </button>
                    <div class="carousel-viewport">
                        <div class="carousel-track" style=track_style>
                            {RESULT_SLIDES
                                .iter()
                                .map(|&slide| {
                                    view! {
                                        <figure class="result-slide" on:click=move |_| set_enlarged.set(Some(slide))>
                                            <img src=slide.image alt=slide.name loading="lazy" />
                                            <figcaption>
                                                <span class="result-name">{slide.name}</span>
                                                <span class="result-course">{slide.course}</span>
                                            </figcaption>
                                        </figure>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <button
                        class="carousel-arrow next"
                        aria-label=move || tr("next")
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        "›"
                    </button>
                </div>

                <div class="carousel-dots">
                    {(0..RESULT_SLIDES.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(Carousel::index) == i { "carousel-dot active" } else { "carousel-dot" }
                                    }
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                enlarged
                    .get()
                    .map(|slide| {
                        view! {
                            <div class="modal-backdrop" on:click=move |_| set_enlarged.set(None)>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <button class="modal-close" aria-label=move || tr("close") on:click=move |_| set_enlarged.set(None)>
                                        "×"
                                    </button>
                                    <img src=slide.image alt=slide.name />
                                    <p class="modal-caption">{slide.name} " · " {slide.course}</p>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
