use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form, Json,
};
use mime::Mime;
use serde::de::DeserializeOwned;
use shared::api::error::ServerError;

/// Request body accepted either as JSON or as an urlencoded form, picked by
/// the `Content-Type` header. An empty body, or one in any other format, reads
/// as an empty request so the fields fail their own validation
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match content_type(req.headers()) {
            Some(value) if is_json(&value) => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::validation(e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }

                let Json(value) = Json::<T>::from_bytes(&bytes)
                    .map_err(|e| ServerError::validation(e.body_text()))?;
                Ok(Self(value))
            },
            Some(value) if is_form(&value) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::validation(e.body_text()))?;
                Ok(Self(value))
            },
            _ => Ok(Self(T::default())),
        }
    }
}

fn content_type(headers: &HeaderMap) -> Option<Mime> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Mime>().ok())
}

fn is_json(value: &Mime) -> bool {
    value.type_() == mime::APPLICATION
        && (value.subtype() == mime::JSON || value.suffix().is_some_and(|s| s == mime::JSON))
}

fn is_form(value: &Mime) -> bool {
    value.type_() == mime::APPLICATION && value.subtype() == mime::WWW_FORM_URLENCODED
}

#[cfg(test)]
mod test {
    use axum::http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};

    use super::{content_type, is_form, is_json};

    fn parsed(content_type_header: &'static str) -> mime::Mime {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type_header));
        content_type(&headers).unwrap()
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&parsed("application/json")));
        assert!(is_json(&parsed("application/json; charset=utf-8")));
        assert!(is_json(&parsed("application/merge-patch+json")));
        assert!(!is_json(&parsed("application/x-www-form-urlencoded")));
        assert!(!is_json(&parsed("text/plain")));
    }

    #[test]
    fn test_is_form() {
        assert!(is_form(&parsed("application/x-www-form-urlencoded")));
        assert!(is_form(&parsed("application/x-www-form-urlencoded; charset=utf-8")));
        assert!(!is_form(&parsed("application/json")));
        assert!(!is_form(&parsed("multipart/form-data; boundary=x")));
    }

    #[test]
    fn test_missing_content_type() {
        assert_eq!(content_type(&HeaderMap::new()), None);
    }
}
