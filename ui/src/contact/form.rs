//! Contact form state and the submit operation.

use serde::Serialize;
use thiserror::Error;

use super::sink::{ContactSink, SinkError};
use super::validate::{validate_field, Field, FormErrors};

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A payload that passed every rule. Values are trimmed; a blank phone is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),
    #[error(transparent)]
    Delivery(#[from] SinkError),
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field. All-or-nothing: any failing rule yields the full error map.
    pub fn validate(&self) -> Result<Submission, FormErrors> {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            errors.record(field, validate_field(field, self.value(field)));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = self.phone.trim();
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate, hand the payload to `sink`, then clear the form. The form keeps its
    /// values when validation or delivery fails.
    pub fn submit(&mut self, sink: &dyn ContactSink) -> Result<Submission, SubmitError> {
        let submission = self.validate().map_err(SubmitError::Invalid)?;
        sink.deliver(&submission)?;
        self.clear();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ValidationError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Submission>>);

    impl ContactSink for Recorder {
        fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
            self.0.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct Refuses;

    impl ContactSink for Refuses {
        fn deliver(&self, _: &Submission) -> Result<(), SinkError> {
            Err(SinkError::Rejected("offline".into()))
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: " A ".into(),
            email: "a@b.com".into(),
            phone: String::new(),
            message: "hi".into(),
        }
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn submission_is_trimmed_and_blank_phone_dropped() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn submit_delivers_then_clears() {
        let sink = Recorder::default();
        let mut form = filled();
        form.phone = "123-456".into();

        let submission = form.submit(&sink).unwrap();
        assert!(form.is_blank());
        assert_eq!(submission.phone.as_deref(), Some("123-456"));
        assert_eq!(sink.0.borrow().len(), 1);
    }

    #[test]
    fn invalid_submit_keeps_values_and_skips_sink() {
        let sink = Recorder::default();
        let mut form = filled();
        form.email = "nope".into();

        let err = form.submit(&sink).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 1));
        assert_eq!(form.email, "nope");
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn failed_delivery_keeps_values() {
        let mut form = filled();
        let err = form.submit(&Refuses).unwrap_err();
        assert!(matches!(err, SubmitError::Delivery(SinkError::Rejected(_))));
        assert_eq!(form, filled());
    }

    #[test]
    fn payload_omits_missing_phone() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["name"], "A");
        assert!(json.get("phone").is_none());
    }
}
