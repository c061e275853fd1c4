//! Data Transfer Objects for the board API.

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use validation::{not_empty_trimmed, ValidatedBody, ValidatedQuery};
