//! Offline stand-in for the email delivery service.
//!
//! The simulator has no network access; messages are logged and accepted,
//! except that the service can be toggled into rejecting everything to
//! exercise the error toast.

use portfolio_common::ContactError;
use portfolio_common::contact::{MailTransport, TemplateParams};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingOutbox {
    pub offline: bool,
    delivered: u32,
}

impl LoggingOutbox {
    pub const fn delivered(&self) -> u32 { self.delivered }
}

impl MailTransport for LoggingOutbox {
    fn send(
        &mut self,
        params: &TemplateParams,
    ) -> Result<(), ContactError> {
        if self.offline {
            return Err(ContactError::Rejected { reason: "service offline".into() });
        }
        self.delivered += 1;
        info!(from = %params.from_email, subject = %params.subject, "message delivered");
        Ok(())
    }
}
