//! Contact form and company contact details.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form holds a [`ContactCapture`] in a local signal and submits through a
//! [`ContactFlow`] bound to the browser: a blocking `alert` on validation
//! failure, otherwise the acknowledgment text, a `mailto:` navigation, and a
//! timed reset of the acknowledgment.
//!
//! Reset timers are tracked by [`PendingResets`] under the configured
//! [`site::config::ResetPolicy`]; with the default `Detach` policy they keep
//! running after the form unmounts and only touch the signal if it still exists.

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use site::capture::{CaptureStore, ContactCapture, ContactFlow, PendingResets};
use site::config::{ContactInfo, SiteConfig};
use site::contact::{ContactField, UnknownField};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::util::browser_host::BrowserHost;
use crate::util::reset_timer::{ResetTimer, TimeoutScheduler};

/// Shown next to the submit button while the acknowledgment is active.
pub const ACKNOWLEDGMENT_TEXT: &str = "Mensaje enviado (cliente de correo abierto)";

/// Signal-backed capture store. Updates notify the form as soon as the flow
/// releases the state, before the mail client is opened.
#[derive(Clone, Copy)]
struct SignalCapture(RwSignal<ContactCapture>);

impl CaptureStore for SignalCapture {
    fn update_capture<R>(&self, f: impl FnOnce(&mut ContactCapture) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let capture = RwSignal::new(ContactCapture::default());
    let flow = StoredValue::new_local(ContactFlow::new(&config, BrowserHost, TimeoutScheduler));
    let pending = StoredValue::new_local(PendingResets::<ResetTimer>::new(config.reset_policy));

    on_cleanup(move || {
        pending.try_update_value(PendingResets::cancel_all);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let store = SignalCapture(capture);
        let reset = move || {
            capture.try_update(ContactCapture::clear_acknowledgment);
        };
        let submitted = flow.with_value(|flow| flow.submit(&store, reset));
        match submitted {
            Some(Ok(timer)) => {
                #[cfg(feature = "hydrate")]
                log::info!("contact handoff issued to mail client");
                pending.update_value(|p| p.track(timer));
            }
            Some(Err(err)) => {
                #[cfg(feature = "hydrate")]
                log::debug!("contact submit blocked: {} is empty", err.field());
                #[cfg(not(feature = "hydrate"))]
                let _ = err;
            }
            None => {}
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let Some(name) = input_name(&ev) else {
            return;
        };
        let value = event_target_value(&ev);
        let applied = capture.try_update(|c| apply_input(c, &name, value));
        #[cfg(feature = "hydrate")]
        {
            if let Some(Err(err)) = applied {
                log::warn!("input ignored: {err}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = applied;
    };

    let field_value = move |field: ContactField| {
        move || capture.with(|c| c.draft().get(field).to_owned())
    };

    view! {
        <section id="contacto" class="section">
            <h2 class="section-title">"Contacto"</h2>
            <div class="contact-grid">
                <form class="panel contact-form" on:submit=on_submit>
                    <label class="contact-form__label" for="contact-name">"Nombre"</label>
                    <input
                        id="contact-name"
                        class="contact-form__input"
                        name=ContactField::Name.as_str()
                        required=true
                        prop:value=field_value(ContactField::Name)
                        on:input=on_input
                    />

                    <label class="contact-form__label" for="contact-message">"Mensaje"</label>
                    <textarea
                        id="contact-message"
                        class="contact-form__input"
                        name=ContactField::Message.as_str()
                        rows="5"
                        required=true
                        prop:value=field_value(ContactField::Message)
                        on:input=on_input
                    ></textarea>

                    <div class="contact-form__actions">
                        <button type="submit" class="button button--primary">"Enviar"</button>
                        <Show when=move || capture.with(ContactCapture::acknowledged)>
                            <span class="contact-form__ack">{ACKNOWLEDGMENT_TEXT}</span>
                        </Show>
                    </div>
                </form>

                <ContactDetails info=config.contact.clone()/>
            </div>
        </section>
    }
}

/// Static contact details beside the form.
#[component]
fn ContactDetails(info: ContactInfo) -> impl IntoView {
    let ContactInfo {
        phone,
        email,
        hours,
    } = info;

    view! {
        <div class="panel panel--muted contact-details">
            <h3 class="contact-details__title">"Información"</h3>
            <p>{phone_line(&phone)}<br/>{email_line(&email)}</p>
            <div class="contact-details__hours">
                <h4>"Horario"</h4>
                <p>{hours}</p>
            </div>
        </div>
    }
}

/// `name` attribute of the form control that fired `ev`.
fn input_name(ev: &leptos::ev::Event) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("name"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Store `value` in the draft field named by an input's `name` attribute.
pub(crate) fn apply_input(
    capture: &mut ContactCapture,
    name: &str,
    value: String,
) -> Result<ContactField, UnknownField> {
    let field = name.parse::<ContactField>()?;
    capture.update(field, value);
    Ok(field)
}

pub(crate) fn phone_line(phone: &str) -> String {
    format!("Tel: {phone}")
}

pub(crate) fn email_line(email: &str) -> String {
    format!("Email: {email}")
}
