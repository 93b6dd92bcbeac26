use serde::Deserialize;

use crate::domain::contact_message::ContactMessage;
use crate::domain::contact_name::ContactName;
use crate::domain::subject::Subject;

/// The contact form exactly as it arrives over the wire. `role_title` is the
/// honeypot: the input is invisible to humans, so any value means the form
/// was filled in by a machine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFormData {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "role_title", default)]
    pub trap: String,
}

/// A contact submission that passed view-layer validation. The honeypot value
/// is carried verbatim; judging it is the gate's job, not the parser's.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: String,
    pub subject: Subject,
    pub message: ContactMessage,
    pub trap: String,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::parse(form.full_name)?;
        // Email syntax is the form backend's call; only presence is ours.
        if form.email.trim().is_empty() {
            return Err("An email address is required.".to_string());
        }
        let subject = Subject::parse(&form.subject)?;
        let message = ContactMessage::parse(form.message)?;

        Ok(Self {
            name,
            email: form.email,
            subject,
            message,
            trap: form.trap,
        })
    }
}

impl ContactSubmission {
    /// True when the honeypot field carries any value.
    pub fn is_suspected_automation(&self) -> bool {
        !self.trap.is_empty()
    }
}
