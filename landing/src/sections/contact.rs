use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lingup_core::contact::{ContactField, ContactForm, FieldError};
use lingup_core::content::{PHONE_DISPLAY, PHONE_HREF, SUPPORT_HOURS};
use lingup_core::countdown::Countdown;
use web_sys::HtmlInputElement;

use crate::api::Api;
use crate::dom;
use crate::state::{use_app_state, use_tr};

const THANK_YOU_FOR: Duration = Duration::from_millis(2000);

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let api = state.api();

    let form = RwSignal::new(ContactForm::default());
    let (phone_error, set_phone_error) = signal(false);
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);

    let countdown = use_promo_countdown(api.clone());

    let edit = move |field: ContactField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            match form.try_update(|f| f.set(field, value)) {
                Some(Err(FieldError::PhoneTooLong)) => {
                    set_phone_error.set(true);
                    // Put the accepted value back into the input.
                    event_target::<HtmlInputElement>(&ev)
                        .set_value(&form.with_untracked(|f| f.phone_number.clone()));
                }
                _ => {
                    if field == ContactField::PhoneNumber {
                        set_phone_error.set(false);
                    }
                }
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let request = form.with_untracked(ContactForm::to_request);
        let api = api.clone();
        set_sending.set(true);

        spawn_local(async move {
            let result = api.send_contact(&request).await;
            let _ = set_sending.try_set(false);
            if form.try_update(|f| f.settle(&result)).unwrap_or(false) {
                tracing::info!("contact request sent");
                let _ = set_sent.try_set(true);
                set_timeout(
                    move || {
                        let _ = set_sent.try_set(false);
                    },
                    THANK_YOU_FOR,
                );
            } else if let Err(e) = result {
                tracing::error!("contact request failed: {e}");
                dom::alert(&e.user_message());
            }
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div class="contact-intro">
                    <span class="section-eyebrow">{move || tr("get_in_touch")}</span>
                    <h2 class="section-title">{move || tr("have_questions")}</h2>

                    <Show when=move || countdown.with(Countdown::is_running)>
                        <div class="timer-card">
                            <span class="timer-label">{move || tr("hurry_places_are_limited")}</span>
                            <span class="timer-value">{move || countdown.with(Countdown::display)}</span>
                        </div>
                    </Show>

                    <div class="info-cards">
                        <a class="info-card" href=PHONE_HREF>
                            <span class="info-label">{move || tr("call_us")}</span>
                            <span class="info-value">{PHONE_DISPLAY}</span>
                        </a>
                        <div class="info-card">
                            <span class="info-label">{move || tr("support_hours")}</span>
                            <span class="info-value">{SUPPORT_HOURS}</span>
                        </div>
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <h3>{move || tr("send_us_message")}</h3>
                    <p class="form-hint">{move || tr("we_will_reply_soon")}</p>

                    <input
                        type="text"
                        required
                        placeholder=move || tr("enter_full_name")
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=edit(ContactField::FullName)
                    />
                    <input
                        type="tel"
                        required
                        placeholder=move || tr("enter_phone")
                        prop:value=move || form.with(|f| f.phone_number.clone())
                        on:input=edit(ContactField::PhoneNumber)
                    />
                    <Show when=move || phone_error.get()>
                        <p class="field-error">{move || tr("phone_error")}</p>
                    </Show>
                    <textarea
                        rows="4"
                        placeholder=move || tr("message")
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=edit(ContactField::Description)
                    ></textarea>
                    <p class="form-hint">{move || tr("help_text")}</p>

                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { tr("sending") } else { tr("send_message") }}
                    </button>
                    <Show when=move || sent.get()>
                        <p class="form-success">{move || tr("thank_you_message")}</p>
                    </Show>
                </form>
            </div>
        </section>
    }
}

/// Promo countdown: one fetch on mount, a local tick and a periodic resync.
fn use_promo_countdown(api: Api) -> RwSignal<Countdown> {
    let state = use_app_state();
    let timer = state.config.with_value(|c| c.timer.clone());
    let countdown = RwSignal::new(Countdown::new());

    let resync = move || {
        let api = api.clone();
        spawn_local(async move {
            match api.timer().await {
                Ok(Some(seconds)) => {
                    let _ = countdown.try_update(|c| c.sync(seconds));
                }
                Ok(None) => tracing::debug!("timer payload without usable seconds"),
                Err(e) => tracing::warn!("timer fetch failed: {e}"),
            }
        });
    };
    resync();

    let tick = set_interval_with_handle(
        move || countdown.update(Countdown::tick),
        Duration::from_millis(timer.tick_ms),
    );
    let poll = set_interval_with_handle(resync, Duration::from_secs(timer.resync_secs));

    let handles: Vec<_> = [tick, poll]
        .into_iter()
        .filter_map(|handle| {
            handle
                .inspect_err(|e| tracing::warn!("countdown interval unavailable: {e:?}"))
                .ok()
        })
        .collect();
    on_cleanup(move || handles.iter().for_each(|h| h.clear()));

    countdown
}
