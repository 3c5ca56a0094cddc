//! Required-field validation for generation requests.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use service_core::error::AppError;

/// A JSON request body with declared required fields.
pub trait GenerationRequest: DeserializeOwned + Send + 'static {
    /// Wire names that must be present, non-null, and not `""`.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Client-facing message when the handler fails.
    const FAILURE_MESSAGE: &'static str;
}

/// Names from `required` that are absent, `null`, or the empty string in
/// `body`, in declaration order.
pub fn missing_fields(body: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| match body.get(**field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .map(|field| field.to_string())
        .collect()
}

pub fn require_fields(body: &Map<String, Value>, required: &[&str]) -> Result<(), AppError> {
    let missing = missing_fields(body, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Message for bodies over the configured limit.
pub const BODY_TOO_LARGE: &str = "request entity too large";

/// Message for JSON bodies whose top level is neither an object nor an array.
pub const BODY_NOT_OBJECT: &str = "JSON body must be an object or array";

/// Whether a `Content-Type` value names a JSON body.
fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Parse a raw JSON body into an object.
///
/// Empty bodies and top-level arrays yield an empty object so required-field
/// checks report every field. Unparseable JSON and top-level primitives fail.
fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Array(_)) => Ok(Map::new()),
        Ok(_) => Err(AppError::Unhandled(BODY_NOT_OBJECT.to_string())),
        Err(e) => Err(AppError::Unhandled(e.to_string())),
    }
}

/// Extractor that checks `T::REQUIRED_FIELDS` before decoding into `T`.
///
/// Bodies without a JSON content type are not read and count as empty.
/// Missing fields reject with 400. Unreadable or oversized bodies reject with
/// the catch-all 500. A body that passes the presence check but does not
/// decode into `T` is a handler failure carrying `T::FAILURE_MESSAGE`.
pub struct RequiredJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RequiredJson<T>
where
    T: GenerationRequest,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        let body = if is_json {
            let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::Unhandled(BODY_TOO_LARGE.to_string())
                } else {
                    AppError::Unhandled(rejection.body_text())
                }
            })?;
            parse_body(&bytes)?
        } else {
            Map::new()
        };

        require_fields(&body, T::REQUIRED_FIELDS)?;

        let request = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::handler_failed(T::FAILURE_MESSAGE, e))?;

        Ok(RequiredJson(request))
    }
}
