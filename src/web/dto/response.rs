//! Response rendering for the board API.
//!
//! Listings and thread views are serialized directly from
//! [`ThreadSummary`](crate::board::ThreadSummary) and
//! [`ThreadDetail`](crate::board::ThreadDetail). Mutation outcomes are
//! plain text.

use axum::response::{IntoResponse, Response};

use crate::board::Outcome;

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        self.as_str().into_response()
    }
}
