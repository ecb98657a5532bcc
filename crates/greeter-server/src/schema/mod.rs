//! API schema types for request/response definitions.

pub mod health;
pub mod submit;
