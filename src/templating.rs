use askama::Template;

use crate::content::{DomainListing, FaqEntry};
use crate::domain::{ContactFormData, FieldErrors, Subject};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub portfolio: &'a [DomainListing],
    pub faqs: &'a [FaqEntry],
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub subjects: &'a [Subject],
    pub values: &'a ContactFormData,
    pub errors: &'a FieldErrors,
}

#[derive(Template)]
#[template(path = "contact_success.html")]
pub struct ContactSuccessTemplate;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
