//! Contact form and hand-off to the transactional email service.
//!
//! The delivery service is opaque: it either accepts the message or rejects
//! it. Either way the visitor sees a toast; only an accepted message clears
//! the form.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::CONTACT_TOAST_MS;
use crate::error::ContactError;
use crate::timer::Millis;
use crate::toast::{ToastKind, ToastSlot};

pub const SENT_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

/// Payload handed to the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

/// Outbound email delivery.
pub trait MailTransport {
    /// Deliver one message. `Err` means the service rejected it.
    fn send(
        &mut self,
        params: &TemplateParams,
    ) -> Result<(), ContactError>;
}

impl<T: MailTransport + ?Sized> MailTransport for &mut T {
    fn send(
        &mut self,
        params: &TemplateParams,
    ) -> Result<(), ContactError> {
        (**self).send(params)
    }
}

/// Form fields as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Template payload addressed to `recipient`.
    pub fn to_params(
        &self,
        recipient: &str,
    ) -> TemplateParams {
        TemplateParams {
            from_name: self.name.trim().to_owned(),
            from_email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.clone(),
            to_email: recipient.to_owned(),
        }
    }

    /// Validate, send and report the outcome as a toast.
    ///
    /// The form is cleared only when the service accepts the message.
    pub fn submit<T: MailTransport>(
        &mut self,
        mut transport: T,
        recipient: &str,
        toasts: &mut ToastSlot,
        now: Millis,
    ) -> Result<(), ContactError> {
        let result = self
            .validate()
            .and_then(|()| transport.send(&self.to_params(recipient)));

        match &result {
            Ok(()) => {
                info!("contact message accepted");
                *self = Self::default();
                toasts.show(ToastKind::Success, SENT_MESSAGE, now, CONTACT_TOAST_MS);
            }
            Err(e) => {
                warn!(error = %e, "contact message not sent");
                toasts.show(ToastKind::Error, FAILED_MESSAGE, now, CONTACT_TOAST_MS);
            }
        }
        result
    }
}

/// One `@`, non-empty local part, dotted domain with no empty labels.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Records deliveries; rejects when `reject` is set.
    #[derive(Default)]
    struct Outbox {
        sent: Vec<TemplateParams>,
        reject: bool,
    }

    impl MailTransport for Outbox {
        fn send(
            &mut self,
            params: &TemplateParams,
        ) -> Result<(), ContactError> {
            if self.reject {
                return Err(ContactError::Rejected { reason: "quota exceeded".into() });
            }
            self.sent.push(params.clone());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn test_accepted_message_clears_form() {
        let mut form = filled();
        let mut outbox = Outbox::default();
        let mut toasts = ToastSlot::new();

        form.submit(&mut outbox, "me@example.com", &mut toasts, 0).unwrap();

        assert_eq!(form, ContactForm::default());
        assert_eq!(outbox.sent.len(), 1);
        assert_eq!(outbox.sent[0].from_email, "ana@example.com");
        assert_eq!(outbox.sent[0].to_email, "me@example.com");
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.duration, CONTACT_TOAST_MS);
    }

    #[test]
    fn test_rejected_message_keeps_form() {
        let mut form = filled();
        let mut outbox = Outbox { reject: true, ..Outbox::default() };
        let mut toasts = ToastSlot::new();

        let err = form.submit(&mut outbox, "me@example.com", &mut toasts, 0).unwrap_err();

        assert!(matches!(err, ContactError::Rejected { .. }));
        assert_eq!(form, filled());
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_invalid_form_never_reaches_transport() {
        let mut form = ContactForm { subject: "  ".into(), ..filled() };
        let mut outbox = Outbox::default();
        let mut toasts = ToastSlot::new();

        let err = form.submit(&mut outbox, "me@example.com", &mut toasts, 0).unwrap_err();

        assert_eq!(err, ContactError::MissingField { field: "subject" });
        assert!(outbox.sent.is_empty());
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org"] {
            assert!(is_plausible_email(good), "{good}");
        }
        for bad in ["", "ana", "@example.com", "ana@", "ana@example", "ana@@example.com", "a b@c.de", "ana@example..com"] {
            assert!(!is_plausible_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_template_param_names() {
        let json = serde_json::to_value(filled().to_params("me@example.com")).unwrap();
        for key in ["from_name", "from_email", "subject", "message", "to_email"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
