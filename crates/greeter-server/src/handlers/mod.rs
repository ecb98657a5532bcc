//! HTTP handler modules for the greeter API.
//!
//! Handlers parse requests, delegate to [`GreeterService`], and return JSON
//! responses. No business logic lives in handlers.
//!
//! [`GreeterService`]: crate::service::GreeterService

pub mod health;
pub mod submit;
