//! State machine for the contact form.
//!
//! Nothing is sent anywhere: a submission only waits out a fixed delay in the
//! view and then shows a confirmation. The timers live in the component; this
//! type holds the fields and the phase they drive.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    /// `type` attribute of the `<input>`; the message is a textarea.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a submission is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Confirmation is showing; the form is cleared.
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    phase: Phase,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// First empty field, in form order. Mirrors the inputs' `required`
    /// attribute: only emptiness is checked, not format.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.value(*f).is_empty())
    }

    /// Start a submission. On error the form is left untouched and no delay
    /// should be scheduled.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.phase == Phase::Submitting {
            return Err(FormError::InFlight);
        }
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// The simulated processing delay elapsed.
    pub fn complete(&mut self) {
        if self.phase != Phase::Submitting {
            return;
        }
        *self = ContactForm {
            phase: Phase::Submitted,
            ..ContactForm::default()
        };
    }

    /// The confirmation auto-hide delay elapsed.
    pub fn dismiss_confirmation(&mut self) {
        if self.phase == Phase::Submitted {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Let's talk about test automation.");
        form
    }

    #[test]
    fn test_full_submit_flow() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitting());
        assert!(!form.is_submitted());
        // fields are kept until the delay elapses
        assert_eq!(form.value(Field::Name), "Ada");

        form.complete();
        assert!(!form.is_submitting());
        assert!(form.is_submitted());
        for field in Field::ALL {
            assert_eq!(form.value(field), "", "{} not cleared", field.id());
        }

        form.dismiss_confirmation();
        assert!(!form.is_submitted());
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, "");
            let before = form.clone();
            assert_eq!(form.submit(), Err(FormError::MissingField(field)));
            assert_eq!(form, before);
            assert_eq!(form.phase(), Phase::Editing);
        }
    }

    #[test]
    fn test_blank_form_reports_first_field() {
        let mut form = ContactForm::default();
        let err = form.submit().unwrap_err();
        assert_eq!(err, FormError::MissingField(Field::Name));
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_stray_timers_are_ignored() {
        let mut form = filled();
        form.complete();
        assert_eq!(form, filled());
        form.dismiss_confirmation();
        assert_eq!(form, filled());
    }

    #[test]
    fn test_can_submit_again_while_confirmation_shows() {
        let mut form = filled();
        form.submit().unwrap();
        form.complete();
        form.set(Field::Name, "Grace");
        form.set(Field::Email, "grace@example.com");
        form.set(Field::Subject, "Again");
        form.set(Field::Message, "Second note");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitting());
    }
}
