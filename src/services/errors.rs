// ============================================================================
// ERRORS - Normalize every transport failure into one ErrorMessage
// ============================================================================

use serde_json::Value;

use crate::models::ErrorMessage;
use crate::services::transport::{HttpResponse, TransportError};
use crate::utils::constants::CONTENT_TYPE_JSON;

/// Where an error came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOrigin {
    /// Server sent a JSON error body
    Application { status: u16, status_text: String, body: Value },
    /// Server answered with an error status and no usable body
    Http { status: u16, status_text: String },
    /// Request sent, nothing came back
    Network,
    /// Request never left the client
    Client(String),
}

impl ErrorOrigin {
    pub fn classify(error: TransportError) -> Self {
        match error {
            TransportError::Response(response) => match json_body(&response) {
                Some(body) => ErrorOrigin::Application {
                    status: response.status,
                    status_text: response.status_text,
                    body,
                },
                None => ErrorOrigin::Http {
                    status: response.status,
                    status_text: response.status_text,
                },
            },
            TransportError::NoResponse(_) => ErrorOrigin::Network,
            TransportError::Request(message) => ErrorOrigin::Client(message),
        }
    }
}

impl From<ErrorOrigin> for ErrorMessage {
    fn from(origin: ErrorOrigin) -> Self {
        match origin {
            ErrorOrigin::Application {
                status,
                status_text,
                body,
            } => {
                let code = ["code", "status"]
                    .iter()
                    .find_map(|key| body.get(*key).and_then(Value::as_i64))
                    .and_then(|code| i32::try_from(code).ok())
                    .unwrap_or(i32::from(status));
                let message = ["message", "msg", "error"]
                    .iter()
                    .find_map(|key| body.get(*key).and_then(Value::as_str))
                    .map(str::to_string)
                    .unwrap_or(status_text);
                ErrorMessage::new(code, message)
            }
            ErrorOrigin::Http {
                status,
                status_text,
            } => ErrorMessage::new(i32::from(status), status_text),
            ErrorOrigin::Network => ErrorMessage::no_response(),
            ErrorOrigin::Client(message) => ErrorMessage::client(message),
        }
    }
}

/// Never fails: every transport error maps to an [`ErrorMessage`].
pub fn resolve_error(error: TransportError) -> ErrorMessage {
    let origin = ErrorOrigin::classify(error);
    log::error!("❌ Request failed: {:?}", origin);
    origin.into()
}

/// Media type match only: `application/json;charset=UTF-8` counts as JSON,
/// unlike a whole-header comparison.
fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case(CONTENT_TYPE_JSON))
        .unwrap_or(false)
}

fn json_body(response: &HttpResponse) -> Option<Value> {
    if response.body.trim().is_empty() || !is_json(response.content_type.as_deref()) {
        return None;
    }
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .filter(Value::is_object)
}
