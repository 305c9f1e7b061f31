//! Contact form: field rules, form state, submission sinks and the form view.

mod form;
pub use form::{ContactForm, SubmitError, Submission};

mod validate;
pub use validate::{validate_field, Field, FormErrors, ValidationError};

mod sink;
pub use sink::{ContactSink, LogSink, SharedSink, SinkError};

mod view;
pub use view::{use_contact_draft_provider, ContactDraft, ContactFormView};
