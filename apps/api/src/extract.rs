use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json<T>` whose rejection is an `AppError::Validation`, so malformed bodies get
/// the same `{"error": {...}}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
