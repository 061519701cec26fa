//! HTTP handlers for the interval form

pub mod form;
pub mod health;

pub use form::{serve_form, submit_form};
pub use health::health_routes;
