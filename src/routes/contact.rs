use actix_web::http::header::{ContentType, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use askama::Template;
use uuid::Uuid;

use crate::domain::{ContactFormData, ContactSubmission, FieldErrors, Subject};
use crate::forwarder::FormForwarder;
use crate::gate::{ContactForm, SubmissionOutcome};
use crate::templating::{ContactSuccessTemplate, ContactTemplate};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to render the page.")]
    RenderError(#[from] askama::Error),
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub async fn contact_form() -> Result<HttpResponse, ContactError> {
    let page = ContactTemplate {
        subjects: &Subject::ALL,
        values: &ContactFormData::default(),
        errors: &FieldErrors::default(),
    }
    .render()?;
    Ok(html(page))
}

#[tracing::instrument(
    name = "Handling a contact submission",
    skip(form, forwarder),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    forwarder: web::Data<FormForwarder>,
) -> Result<HttpResponse, ContactError> {
    let data = form.into_inner();
    let submission =
        ContactSubmission::try_from(data.clone()).map_err(ContactError::ValidationError)?;

    // One form instance per interaction; it does not outlive the request.
    let (gate, _signals) = ContactForm::new(forwarder.get_ref().clone());
    match gate.submit(submission).await {
        SubmissionOutcome::Discarded => {
            // Forced close. The submitting actor gets no error to learn from.
            Ok(HttpResponse::SeeOther()
                .insert_header((LOCATION, "/"))
                .finish())
        }
        SubmissionOutcome::Delivered => {
            let page = ContactSuccessTemplate.render()?;
            Ok(html(page))
        }
        SubmissionOutcome::Rejected(errors) => {
            let page = ContactTemplate {
                subjects: &Subject::ALL,
                values: &data,
                errors: &errors,
            }
            .render()?;
            Ok(html(page))
        }
        // A fresh instance cannot already have an attempt in flight.
        SubmissionOutcome::Ignored => Ok(HttpResponse::Conflict().finish()),
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
