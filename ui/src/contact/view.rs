use dioxus::prelude::*;

use crate::core::state::SiteEvent;
use crate::t;
use crate::views::use_site;

use super::{
    ContactForm, ContactSink, Field, FormErrors, SharedSink, SubmitError, Submission,
    ValidationError,
};

/// Localized inline message for a failed rule.
fn error_text(field: Field, err: ValidationError) -> String {
    match (field, err) {
        (Field::Name, _) => t!("form-error-name-required"),
        (Field::Email, ValidationError::Required) => t!("form-error-email-required"),
        (Field::Email, ValidationError::InvalidFormat) => t!("form-error-email-invalid"),
        (Field::Phone, _) => t!("form-error-phone-invalid"),
        (Field::Message, _) => t!("form-error-message-required"),
    }
}

fn placeholder(field: Field) -> String {
    match field {
        Field::Name => t!("form-name"),
        Field::Email => t!("form-email"),
        Field::Phone => t!("form-phone"),
        Field::Message => t!("form-message"),
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "contact-form__input contact-form__input--invalid"
    } else {
        "contact-form__input"
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

/// Form values and inline errors. Held by the root view, so remounting the page on a
/// language switch keeps what the visitor has typed.
#[derive(Clone, Copy)]
pub struct ContactDraft {
    form: Signal<ContactForm>,
    errors: Signal<FormErrors>,
    attempted: Signal<bool>,
}

impl ContactDraft {
    pub fn form(&self) -> ContactForm {
        self.form.read().clone()
    }

    pub fn errors(&self) -> FormErrors {
        self.errors.read().clone()
    }

    /// Store the edited value. Once a submit has failed, the edited field is re-checked so
    /// its error disappears as soon as the value becomes valid.
    pub fn edit(mut self, field: Field, value: String) {
        if (self.attempted)() {
            self.errors.with_mut(|e| e.recheck(field, &value));
        }
        self.form.with_mut(|f| f.set(field, value));
    }

    /// Submit the current values. Errors are kept for inline display; a success clears them.
    pub fn submit(mut self, sink: &dyn ContactSink) -> Result<Submission, SubmitError> {
        let outcome = self.form.with_mut(|f| f.submit(sink));
        match &outcome {
            Ok(_) => {
                self.attempted.set(false);
                self.errors.set(FormErrors::default());
            }
            Err(SubmitError::Invalid(found)) => {
                self.attempted.set(true);
                self.errors.set(found.clone());
            }
            Err(SubmitError::Delivery(_)) => {}
        }
        outcome
    }
}

/// Create the draft in the calling scope and share it with descendants.
pub fn use_contact_draft_provider() -> ContactDraft {
    let form = use_signal(ContactForm::default);
    let errors = use_signal(FormErrors::default);
    let attempted = use_signal(|| false);
    use_context_provider(|| ContactDraft {
        form,
        errors,
        attempted,
    })
}

#[component]
pub fn ContactFormView() -> Element {
    let site = use_site();
    let sink = use_context::<SharedSink>();
    let draft = use_context::<ContactDraft>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.submit(sink.get()) {
            Ok(_) => site.dispatch(SiteEvent::FormAccepted),
            Err(SubmitError::Invalid(found)) => {
                tracing::debug!(failures = found.len(), "contact form rejected");
            }
            Err(err) => tracing::warn!(%err, "contact form not delivered"),
        }
    };

    let values = draft.form();
    let current_errors = draft.errors();
    let sent = site.state().ack.visible;

    rsx! {
        form { class: "contact-form", "novalidate": "true", onsubmit: on_submit,
            for field in [Field::Name, Field::Email, Field::Phone] {
                div { key: "{field.name()}", class: "contact-form__field",
                    input {
                        class: input_class(current_errors.get(field).is_some()),
                        name: field.name(),
                        r#type: input_type(field),
                        placeholder: placeholder(field),
                        value: "{values.value(field)}",
                        oninput: move |evt: FormEvent| draft.edit(field, evt.value()),
                    }
                    if let Some(err) = current_errors.get(field) {
                        span { class: "contact-form__error", role: "alert", {error_text(field, err)} }
                    }
                }
            }

            div { class: "contact-form__field",
                textarea {
                    class: input_class(current_errors.get(Field::Message).is_some()),
                    name: Field::Message.name(),
                    rows: "4",
                    placeholder: placeholder(Field::Message),
                    value: "{values.message}",
                    oninput: move |evt: FormEvent| draft.edit(Field::Message, evt.value()),
                }
                if let Some(err) = current_errors.get(Field::Message) {
                    span { class: "contact-form__error", role: "alert", {error_text(Field::Message, err)} }
                }
            }

            button { r#type: "submit", class: "button button--primary contact-form__submit",
                {t!("form-submit")}
            }

            if sent {
                p { class: "contact-form__sent", role: "status", {t!("form-sent")} }
            }
        }
    }
}
