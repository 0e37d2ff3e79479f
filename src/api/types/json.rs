//! JSON body extraction that rejects in the API error envelope

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorType};

/// Wrapper around `axum::Json` whose rejection is an [`ApiError`], so a
/// malformed request body gets the same `{"error": ...}` shape as every
/// other failure instead of axum's plain-text response.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(body_error(rejection)),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

fn body_error(rejection: JsonRejection) -> ApiError {
    let message = match &rejection {
        // The data-error body text carries the serde field info
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            format!("Invalid JSON syntax: {}", err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        _ => "Invalid JSON request".to_string(),
    };

    ApiError::new(rejection.status(), ApiErrorType::InvalidRequestError, message)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct SongBody {
        #[allow(dead_code)]
        title: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let req = json_request(r#"{"title": "Imagine"}"#);
        let Json(body) = Json::<SongBody>::from_request(req, &()).await.unwrap();
        assert_eq!(body.title, "Imagine");
    }

    #[tokio::test]
    async fn test_syntax_error_rejects_in_error_envelope() {
        let req = json_request(r#"{"title": "#);
        let err = Json::<SongBody>::from_request(req, &()).await.unwrap_err();

        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert!(err.response.error.message.contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_missing_content_type_rejects() {
        let req = Request::builder()
            .body(Body::from(r#"{"title": "Imagine"}"#))
            .unwrap();
        let err = Json::<SongBody>::from_request(req, &()).await.unwrap_err();

        assert!(err.response.error.message.contains("Content-Type"));
    }
}
