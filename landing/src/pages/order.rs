//! Order wizard: pick a plan, pay by card transfer, upload the receipt.

use std::time::Duration;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lingup_core::api::{PaymentCard, PricePlan};
use lingup_core::content::TELEGRAM_URL;
use lingup_core::countdown::{Countdown, format_mm_ss};
use lingup_core::order::{
    CardAccent, ConfirmationForm, OrderField, active_plans, copy_id, find_plan,
    format_card_number, format_plan_price, retain_selection,
};
use lingup_core::{ApiError, View};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, Node};

use crate::dom;
use crate::state::{use_app_state, use_tr};

/// Inline message under the confirmation form.
#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Incomplete,
    Failed(Option<String>),
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();

    view! {
        <div class="order-page">
            <div class="container">
                <button class="btn btn-ghost order-back" on:click=move |_| state.view.set(View::Landing)>
                    "← " {move || tr("back_home")}
                </button>
                <div class="order-grid">
                    <div class="order-main">
                        <PlanPicker />
                        <PaymentCards />
                        <ConfirmationStep />
                    </div>
                    <aside class="order-aside">
                        <PaymentWindow />
                        <a class="btn btn-secondary" href=TELEGRAM_URL target="_blank" rel="noopener">
                            {move || tr("need_help")}
                        </a>
                    </aside>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PlanPicker() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let api = state.api();

    let plans = LocalResource::new(move || {
        let api = api.clone();
        async move { api.price_plans().await.map(active_plans) }
    });
    let selected = RwSignal::new(None::<String>);
    let (open, set_open) = signal(false);
    let dropdown = NodeRef::<Div>::new();

    Effect::new(move || {
        if let Some(Ok(list)) = plans.get() {
            selected.update(|current| *current = retain_selection(current.as_deref(), &list));
        }
    });

    let outside_click = window_event_listener(ev::mousedown, move |ev| {
        let Some(root) = dropdown.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| root.contains(Some(&node)));
        if !inside {
            set_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let current = move || -> Option<PricePlan> {
        let list = plans.get()?.ok()?;
        selected.with(|id| find_plan(&list, id.as_deref()).cloned())
    };

    let options = move |list: Vec<PricePlan>| {
        list.into_iter()
            .map(|plan| {
                let id = plan.id.to_string();
                let is_selected = {
                    let id = id.clone();
                    move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                };
                view! {
                    <li
                        class=move || if is_selected() { "plan-option selected" } else { "plan-option" }
                        on:click=move |_| {
                            selected.set(Some(id.clone()));
                            set_open.set(false);
                        }
                    >
                        <span>{plan.course}</span>
                        <span class="plan-price">{format_plan_price(&plan.price)}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="order-card">
            <h2>{move || tr("course_price")}</h2>
            {move || match plans.get() {
                None => view! { <p class="muted">{tr("plans_loading")}</p> }.into_any(),
                Some(Err(e)) => view! {
                    <p class="field-error">{tr("plans_failed")} " " {e.user_message()}</p>
                }
                .into_any(),
                Some(Ok(list)) => view! {
                    <div class="plan-dropdown" node_ref=dropdown>
                        <button class="plan-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                            {move || match current() {
                                Some(plan) => format!("{} · {}", plan.course, format_plan_price(&plan.price)),
                                None => tr("select_plan").to_owned(),
                            }}
                        </button>
                        <Show when=move || open.get()>
                            <ul class="plan-options">{options(list.clone())}</ul>
                        </Show>
                    </div>
                }
                .into_any(),
            }}
            {move || {
                current()
                    .map(|plan| {
                        view! {
                            <div class="plan-summary">
                                <span class="muted">{tr("selected_plan")}</span>
                                <strong>{plan.course}</strong>
                                <span class="plan-price">{format_plan_price(&plan.price)}</span>
                                {plan.description.map(|d| view! { <p class="muted">{d}</p> })}
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn PaymentCards() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let api = state.api();

    let cards = LocalResource::new(move || {
        let api = api.clone();
        async move { api.payment_cards().await }
    });
    // Key of the card whose number was just copied.
    let copied = RwSignal::new(None::<String>);

    let card_view = move |card: PaymentCard| {
        let key = copy_id(&card);
        let number = format_card_number(&card.card_number);
        let accent = CardAccent::from_kind(&card.kind).css_class();
        let is_copied = {
            let key = key.clone();
            move || copied.with(|c| c.as_deref() == Some(key.as_str()))
        };
        let on_copy = {
            let number = number.clone();
            let key = key.clone();
            move |_| {
                dom::copy_to_clipboard(&number);
                copied.set(Some(key.clone()));
                let key = key.clone();
                set_timeout(
                    move || {
                        let _ = copied.try_update(|c| {
                            if c.as_deref() == Some(key.as_str()) {
                                *c = None;
                            }
                        });
                    },
                    dom::COPIED_FLASH,
                );
            }
        };
        view! {
            <button id=key class=format!("payment-card {accent}") on:click=on_copy>
                <span class="payment-card-type">{card.kind}</span>
                <span class="payment-card-number">{number}</span>
                <span class="payment-card-holder">{card.full_name}</span>
                <span class="payment-card-copy">
                    {move || if is_copied() { tr("copied") } else { tr("copy") }}
                </span>
            </button>
        }
    };

    view! {
        <section class="order-card">
            <h2>{move || tr("pay_step_1")}</h2>
            {move || match cards.get() {
                None => view! { <p class="muted">{tr("cards_loading")}</p> }.into_any(),
                Some(Err(e)) => view! {
                    <p class="field-error">{tr("cards_failed")} " " {e.user_message()}</p>
                }
                .into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p class="muted">{tr("no_cards")}</p> }.into_any(),
                Some(Ok(list)) => view! {
                    <div class="payment-cards">{list.into_iter().map(card_view).collect_view()}</div>
                }
                .into_any(),
            }}
            <p class="muted">{move || tr("pay_step_2")}</p>
        </section>
    }
}

#[component]
fn PaymentWindow() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let window_secs = state.config.with_value(|c| c.order.payment_window_secs);

    let countdown = RwSignal::new(Countdown::new());
    countdown.update(|c| c.sync(window_secs));

    match set_interval_with_handle(move || countdown.update(Countdown::tick), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("payment window countdown disabled: {e:?}"),
    }

    view! {
        <div class="payment-window">
            <span class="muted">{move || tr("payment_deadline")}</span>
            <span class="payment-window-time">
                {move || format_mm_ss(countdown.with(|c| c.remaining().unwrap_or(0)))}
            </span>
        </div>
    }
}

#[component]
fn ConfirmationStep() -> impl IntoView {
    let state = use_app_state();
    let tr = use_tr();
    let api = state.api();

    let form = RwSignal::new(ConfirmationForm::default());
    let receipt = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let notice = RwSignal::new(None::<Notice>);

    on_cleanup(move || {
        if let Some(Some(url)) = preview.try_get_untracked() {
            dom::revoke_preview(&url);
        }
    });

    let attach = move |file: File| {
        tracing::debug!("receipt attached: {} ({} bytes)", file.name(), file.size());
        let next = if dom::is_image(&file) { dom::preview_url(&file) } else { None };
        if let Some(old) = preview.get_untracked() {
            dom::revoke_preview(&old);
        }
        preview.set(next);
        receipt.set(Some(file));
    };

    let on_file = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            attach(file);
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            attach(file);
        }
    };

    let ready = move || receipt.with(|r| form.with(|f| f.is_ready(r.is_some())));

    let field = move |name: OrderField, key: &'static str, placeholder: &'static str| {
        view! {
            <label class="form-field">
                <span>{move || tr(key)}</span>
                <input
                    type="text"
                    placeholder=move || tr(placeholder)
                    prop:value=move || form.with(|f| f.get(name).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set(name, value));
                        notice.set(None);
                    }
                />
            </label>
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(file) = receipt.get_untracked() else {
            notice.set(Some(Notice::Incomplete));
            return;
        };
        let fields = match form.with_untracked(|f| f.validate(true)) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!("confirmation blocked: {e}");
                notice.set(Some(Notice::Incomplete));
                return;
            }
        };

        let api = api.clone();
        set_submitting.set(true);
        notice.set(None);
        spawn_local(async move {
            let result = api.send_confirmation(&fields, &file).await;
            let _ = set_submitting.try_set(false);
            match result {
                Ok(()) => {
                    tracing::info!("payment confirmation submitted");
                    state.view.set(View::Success);
                }
                Err(e) => {
                    tracing::error!("payment confirmation failed: {e}");
                    let detail = match e {
                        ApiError::Status { detail, .. } => detail,
                        _ => None,
                    };
                    let _ = notice.try_set(Some(Notice::Failed(detail)));
                }
            }
        });
    };

    view! {
        <form class="order-card confirmation" on:submit=on_submit>
            <h2>{move || tr("pay_step_3")}</h2>
            {field(OrderField::FullName, "full_name", "full_name_placeholder")}
            {field(OrderField::Phone, "phone", "phone")}
            {field(OrderField::TelegramUsername, "telegram_username", "telegram_username")}

            <label
                class="receipt-drop"
                on:dragover=|ev: ev::DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                <input type="file" accept="image/*,application/pdf" on:change=on_file />
                <span>{move || tr("upload_receipt")}</span>
                <span class="muted">{move || tr("receipt_hint")}</span>
                {move || receipt.with(|r| r.as_ref().map(File::name))
                    .map(|name| view! { <span class="receipt-name">{name}</span> })}
                {move || preview.get().map(|src| view! { <img class="receipt-preview" src=src alt="" /> })}
            </label>

            {move || notice.get().map(|n| {
                let text = match n {
                    Notice::Incomplete => tr("fill_all_fields").to_owned(),
                    Notice::Failed(Some(detail)) => detail,
                    Notice::Failed(None) => tr("submit_failed").to_owned(),
                };
                view! { <p class="field-error">{text}</p> }
            })}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || submitting.get() || !ready()
            >
                {move || if submitting.get() { tr("sending") } else { tr("continue") }}
            </button>
        </form>
    }
}
