use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections render as our 400 error body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(JsonRejection::JsonDataError(e)) => Err(ApiError::Validation {
                    message: e.body_text(),
                    field: None,
                    location: ErrorLocation::from(Location::caller()),
                }),
                Err(rejection) => Err(ApiError::BadRequest {
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
