use leptos::prelude::*;
use lingup_core::{ApiError, View};
use lingup_core::courses::{Course, build_courses};

use crate::state::{use_app_state, use_tr};

/// Card index that carries the "popular" badge.
const POPULAR_INDEX: usize = 1;

#[component]
pub fn Courses() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let api = state.api();

    // Refetched and rebuilt whenever the language changes.
    let courses = LocalResource::new(move || {
        let lang = state.language.get();
        let api = api.clone();
        let (pricing, stats) = state
            .config
            .with_value(|c| (c.pricing.clone(), c.course_stats.clone()));
        async move {
            let rows = api.skills(lang).await?;
            Ok::<_, ApiError>(build_courses(&rows, lang, &pricing, &stats))
        }
    });

    let body = move || match courses.get() {
        None => view! {
            <div class="courses-status">
                <div class="spinner"></div>
                <p>{tr("loading_courses")}</p>
                <p class="muted">{tr("loading_courses_hint")}</p>
            </div>
        }
        .into_any(),
        Some(Err(e)) => view! {
            <div class="courses-status error">
                <p>{tr("courses_failed")}</p>
                <p class="muted">{e.user_message()}</p>
                <p class="muted">{tr("check_connection")}</p>
            </div>
        }
        .into_any(),
        Some(Ok(list)) => view! {
            <div class="courses-grid">
                {list
                    .into_iter()
                    .enumerate()
                    .map(|(i, course)| view! { <CourseCard course=course popular={i == POPULAR_INDEX} /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <Show when=move || !loaded_empty(courses.get().as_ref())>
            <section id="courses" class="courses">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{move || tr("choose_path")}</h2>
                        <p class="section-description">{move || tr("choose_path_description")}</p>
                    </div>
                    {body}
                </div>
            </section>
        </Show>
    }
}

/// A successful load with no active courses hides the whole section.
fn loaded_empty(state: Option<&Result<Vec<Course>, ApiError>>) -> bool {
    matches!(state, Some(Ok(list)) if list.is_empty())
}

#[component]
fn CourseCard(course: Course, popular: bool) -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();

    let features = course
        .features
        .into_iter()
        .map(|feature| {
            let class = if feature.status { "feature included" } else { "feature excluded" };
            let mark = if feature.status { "✓" } else { "✕" };
            view! {
                <li class=class>
                    <span class="feature-mark">{mark}</span>
                    {feature.name}
                </li>
            }
        })
        .collect_view();

    view! {
        <article class=if popular { "course-card popular" } else { "course-card" }>
            {popular.then(|| view! { <span class="course-badge">{move || tr("popular")}</span> })}
            <h3 class="course-title">{course.title}</h3>
            <p class="course-description">{course.description}</p>
            <div class="course-price">
                {course.original_price.map(|p| view! { <s class="course-price-original">{p}</s> })}
                <span class="course-price-current">{course.price}</span>
            </div>
            <ul class="course-meta">
                <li>{course.duration}</li>
                <li>{course.lessons}</li>
                <li>{course.students} " " {move || tr("students_suffix")}</li>
            </ul>
            <h4 class="course-features-title">{move || tr("course_features")}</h4>
            <ul class="course-features">{features}</ul>
            <button class="btn btn-primary course-enroll" on:click=move |_| state.view.set(View::Order)>
                {move || tr("enroll_now")}
            </button>
        </article>
    }
}
