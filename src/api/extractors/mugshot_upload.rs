//! Optional mugshot file upload extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};

use crate::config::MUGSHOT_FIELD;
use crate::domain::Mugshot;
use crate::errors::AppError;

/// Reads the `mugshot` file field from a `multipart/form-data` body.
///
/// Requests without a multipart body, or with an empty file field, yield
/// `None`. Other form fields are ignored. A `mugshot` part that is not a
/// file (no `filename`) is rejected with 422; a body over the upload limit
/// with 413; any other unreadable body with 400.
pub struct MugshotUpload(pub Option<Mugshot>);

#[async_trait]
impl<S> FromRequest<S> for MugshotUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            return Ok(MugshotUpload(None));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;

        let mut mugshot = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?
        {
            if field.name() != Some(MUGSHOT_FIELD) {
                continue;
            }

            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::validation("mugshot must be a file upload"))?;
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| multipart_error(e.status(), e.body_text()))?;

            // Browsers send an empty part when no file was chosen
            if filename.is_empty() && data.is_empty() {
                continue;
            }

            mugshot = Some(Mugshot {
                filename,
                content_type,
                size: data.len(),
            });
        }

        Ok(MugshotUpload(mugshot))
    }
}

/// 413 when the body limit was hit, 400 for everything else.
fn multipart_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::bad_request(message)
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_is_multipart() {
        let mut headers = HeaderMap::new();
        assert!(!is_multipart(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_multipart(&headers));

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=xyz"),
        );
        assert!(is_multipart(&headers));
    }

    #[test]
    fn test_multipart_error_status() {
        assert!(matches!(
            multipart_error(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into()),
            AppError::PayloadTooLarge
        ));
        assert!(matches!(
            multipart_error(StatusCode::BAD_REQUEST, "invalid boundary".into()),
            AppError::BadRequest(_)
        ));
    }
}
