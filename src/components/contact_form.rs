//! Contact form with inline validation and relay submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field state and the submit lifecycle live in `state::contact`. This
//! component forwards input events, runs the relay call between
//! `begin_submit` and `finish_submit`, and hands the outcome banner to
//! `notification::notify`.

use leptos::prelude::*;

use super::notification::notify;
use crate::state::contact::{ContactForm, FieldKind, FieldSpec, blocked_notification};
use crate::state::notification::NotificationState;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        match started {
            Ok(fields) => {
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    use crate::net::config::RelayConfig;
                    use crate::net::relay;

                    let outcome = match RelayConfig::from_env() {
                        Ok(config) => relay::send(&config, &fields).await,
                        Err(err) => Err(err.into()),
                    };
                    match &outcome {
                        Ok(()) => log::info!("contact message relayed"),
                        Err(err) => log::error!("contact relay failed: {err}"),
                    }
                    if let Some(banner) = form.try_update(|f| f.finish_submit(&outcome)) {
                        notify(notifications, banner);
                    }
                });
                #[cfg(not(feature = "csr"))]
                {
                    let _ = fields;
                }
            }
            Err(err) => {
                if let Some(banner) = blocked_notification(err) {
                    notify(notifications, banner);
                }
            }
        }
    };

    let fields = form
        .get_untracked()
        .fields()
        .iter()
        .map(|field| field.spec)
        .collect::<Vec<_>>();

    view! {
        <section id="contact" class="contact section">
            <h2 class="section-title">"Get In Touch"</h2>
            <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                {fields.into_iter().map(|spec| view! { <FormField spec=spec form=form/> }).collect_view()}
                <button type="submit" class="btn btn-primary" disabled=move || form.get().is_sending()>
                    <span class="btn-text" class:btn-loading=move || form.get().is_sending()>
                        {move || form.get().submit_label()}
                    </span>
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormField(spec: FieldSpec, form: RwSignal<ContactForm>) -> impl IntoView {
    let name = spec.name;
    let error_id = format!("{name}-error");
    let value = move || form.get().value(name).unwrap_or_default().to_owned();
    let has_error = move || form.get().error(name).is_some();
    let error_text = move || form.get().error(name).map(|e| e.to_string()).unwrap_or_default();
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.input(name, event_target_value(&ev)));

    let control = if spec.multiline {
        view! {
            <textarea
                id=name
                name=name
                rows="5"
                required=spec.required
                aria-describedby=error_id.clone()
                class:error=has_error
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = match spec.kind {
            FieldKind::Email => "email",
            FieldKind::Text => "text",
        };
        view! {
            <input
                id=name
                name=name
                type=input_type
                required=spec.required
                aria-describedby=error_id.clone()
                class:error=has_error
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=name>{spec.label}</label>
            {control}
            <span id=error_id class="error-message" aria-live="polite">{error_text}</span>
        </div>
    }
}
