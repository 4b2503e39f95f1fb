use std::time::Duration;

use leptos::prelude::*;
use lingup_core::carousel::{Carousel, paginate};
use lingup_core::content::{REVIEWS_PER_PAGE, REVIEWS_SHOWN, Review, reviews};

use crate::state::{use_app_state, use_tr};

const AUTOPLAY: Duration = Duration::from_millis(4500);

#[component]
pub fn Reviews() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();

    let pages = Memo::new(move |_| {
        paginate(&reviews(state.language.get()), REVIEWS_PER_PAGE, REVIEWS_SHOWN)
    });
    let carousel = RwSignal::new(Carousel::new(pages.with_untracked(Vec::len)));
    let (paused, set_paused) = signal(false);

    let advance = move || {
        if !paused.get_untracked() {
            carousel.update(Carousel::next);
        }
    };
    match set_interval_with_handle(advance, AUTOPLAY) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("reviews autoplay disabled: {e:?}"),
    }

    let current_page = move || {
        let index = carousel.with(Carousel::index);
        pages.with(|pages| pages.get(index).cloned().unwrap_or_default())
    };

    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <div class="section-header">
                    <span class="section-eyebrow">{move || tr("reviews_eyebrow")}</span>
                    <h2 class="section-title">{move || tr("reviews_title")}</h2>
                </div>

                <div
                    class="reviews-page"
                    on:mouseenter=move |_| set_paused.set(true)
                    on:mouseleave=move |_| set_paused.set(false)
                >
                    {move || current_page().into_iter().map(review_card).collect_view()}
                </div>

                <div class="carousel-controls">
                    <button
                        class="carousel-arrow prev"
                        aria-label=move || tr("previous")
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        "‹"
                    </button>
                    <div class="carousel-dots">
                        {move || {
                            (0..carousel.with(Carousel::len))
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
                                .collect_view()
                        }}
                    </div>
                    <button
                        class="carousel-arrow next"
                        aria-label=move || tr("next")
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}

fn review_card(review: Review) -> impl IntoView {
    let stars = "★".repeat(usize::from(review.rating));
    view! {
        <article class="review-card">
            <header class="review-author">
                <img class="review-avatar" src=review.reviewer.avatar alt=review.reviewer.name loading="lazy" />
                <div>
                    <div class="review-name">{review.reviewer.name}</div>
                    <div class="review-age">{review.reviewer.age}</div>
                </div>
            </header>
            <div class="review-rating" aria-label=format!("{} / 5", review.rating)>{stars}</div>
            <p class="review-text">{review.text}</p>
            <span class="review-course">{review.course}</span>
        </article>
    }
}
