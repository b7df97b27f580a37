//! 请求体提取器

use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, Method},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::error::CoreError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body decoded from JSON or from an urlencoded form.
///
/// An empty body decodes to `T::default()`. Decoding failures become
/// [`CoreError::BadRequest`] instead of axum's default 415/422 rejections.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase());

    match content_type.as_deref() {
        Some(ct) if ct.starts_with(FORM_CONTENT_TYPE) => BodyKind::Form,
        Some(ct) if ct.starts_with("application/json") => BodyKind::Json,
        Some(ct) if ct.split(';').next().unwrap_or("").ends_with("+json") => BodyKind::Json,
        _ => BodyKind::Other,
    }
}

async fn decode_form<T, S>(method: Method, bytes: Bytes, state: &S) -> Result<T, CoreError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let req = Request::builder()
        .method(method)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from(bytes))
        .map_err(|e| CoreError::bad_request(e.to_string()))?;
    let Form(value) = Form::<T>::from_request(req, state).await?;
    Ok(value)
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req);
        let method = req.method().clone();
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() {
            return Ok(Payload(T::default()));
        }

        match kind {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_bytes(&bytes)?;
                Ok(Payload(value))
            }
            BodyKind::Form => Ok(Payload(decode_form(method, bytes, state).await?)),
            BodyKind::Other => Err(CoreError::bad_request(
                "Expected request with `Content-Type: application/json`",
            )),
        }
    }
}
