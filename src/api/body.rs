use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Optional request body, JSON or url-encoded form. An empty body reads as `{}`.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<S, T> FromRequest<S> for RequestBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let form = is_form(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        parse_body(&bytes, form).map(RequestBody)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(rejection.body_text())
    }
}

fn parse_body<T: DeserializeOwned + Default>(body: &Bytes, form: bool) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    if form {
        return serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::Validation(format!("Invalid form body: {}", e)));
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct TokenOnly {
        token: Option<String>,
    }

    #[test]
    fn test_empty_body_is_default() {
        let parsed: TokenOnly = parse_body(&Bytes::new(), false).unwrap();
        assert!(parsed.token.is_none());

        let parsed: TokenOnly = parse_body(&Bytes::from_static(b"  \n"), true).unwrap();
        assert!(parsed.token.is_none());
    }

    #[test]
    fn test_json_body() {
        let parsed: TokenOnly =
            parse_body(&Bytes::from_static(br#"{"token":"abc"}"#), false).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_form_body() {
        let parsed: TokenOnly =
            parse_body(&Bytes::from_static(b"token=device%2D1"), true).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("device-1"));
    }

    #[test]
    fn test_invalid_json_is_validation_error() {
        let result: Result<TokenOnly> = parse_body(&Bytes::from_static(b"{not json"), false);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_form_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_form(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        assert!(is_form(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_form(&headers));
    }
}
