//! Request extraction that routes deserialization failures through
//! [`crate::error::Error`] instead of axum's default rejection.

use axum::extract::FromRequest;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::Error;

/// Drop-in replacement for `axum::Json` whose rejection renders as the API's
/// itemized 400 error list.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}
