use reqwest::Client;
use serde::Deserialize;

use crate::domain::{ContactSubmission, FieldErrors};

/// Client for the hosted form-processing service that actually delivers
/// contact submissions. The service is opaque to us: we hand over the four
/// visible form fields and relay whatever verdict comes back.
#[derive(Clone)]
pub struct FormForwarder {
    http_client: Client,
    // {base_url}/f/{form_id}, resolved once at construction
    endpoint: String,
}

#[derive(serde::Serialize)]
struct ContactPayload<'a> {
    #[serde(rename = "fullName")]
    full_name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<RejectionEntry>,
}

#[derive(Debug, Deserialize)]
struct RejectionEntry {
    field: Option<String>,
    message: String,
}

impl RejectionBody {
    fn into_field_errors(self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for entry in self.errors {
            match entry.field {
                Some(field) => errors.push_field(field, entry.message),
                None => errors.push_form_wide(entry.message),
            }
        }
        errors
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("The form backend rejected the submission.")]
    Rejected(FieldErrors),
    #[error("Failed to reach the form backend.")]
    Transport(#[from] reqwest::Error),
}

impl FormForwarder {
    pub fn new(base_url: String, form_id: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client.");
        Self {
            http_client,
            endpoint: format!("{}/f/{}", base_url, form_id),
        }
    }

    /// Forward one submission. The honeypot value never enters the payload.
    pub async fn forward(&self, submission: &ContactSubmission) -> Result<(), ForwardError> {
        let payload = ContactPayload {
            full_name: submission.name.as_ref(),
            email: &submission.email,
            subject: submission.subject.as_str(),
            message: submission.message.as_ref(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .form(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Validation rejections come back as a JSON error list; anything the
        // body cannot account for collapses into one form-wide message.
        let errors = match response.json::<RejectionBody>().await {
            Ok(body) if !body.errors.is_empty() => body.into_field_errors(),
            _ => FieldErrors::form_wide(
                "The submission service is temporarily unavailable. Please try again later.",
            ),
        };
        tracing::warn!(status = %status, "Form backend rejected a submission.");
        Err(ForwardError::Rejected(errors))
    }
}
