pub mod contact;
pub mod health_check;
pub mod home;
pub mod not_found;
