mod contact_message;
mod contact_name;
mod contact_submission;
mod field_errors;
mod subject;

// expose chosen features on a sub-crate level
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_submission::ContactFormData;
pub use contact_submission::ContactSubmission;
pub use field_errors::FieldErrors;
pub use subject::Subject;
