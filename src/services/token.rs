// ============================================================================
// TOKEN - Decode a session token (header.payload.signature) into UserInfo
// ============================================================================
// The signature is not verified here: the backend does that on every call.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::UserInfo;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token: expected 3 segments, found {segments}")]
    Malformed { segments: usize },
    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token has no subject claim")]
    MissingSubject,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    #[serde(default)]
    sub: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role_id: Option<i32>,
    #[serde(default)]
    iat: Option<i64>,
    #[serde(default)]
    exp: Option<i64>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Decodes the payload segment of `token` into a [`UserInfo`].
///
/// Only the segment count is checked structurally; an empty payload fails
/// as JSON. The payload must carry a `sub` claim (string or number), which
/// becomes `user_id`; without one the token is rejected with
/// [`TokenError::MissingSubject`].
pub fn resolve_token(token: &str) -> Result<UserInfo, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed {
            segments: segments.len(),
        });
    }

    let payload = decode_segment(segments[1])?;
    let claims: Claims = serde_json::from_slice(&payload)?;

    let sub = match claims.sub {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(TokenError::MissingSubject),
    };

    Ok(UserInfo {
        user_id: sub.clone(),
        sub,
        token: token.to_string(),
        name: claims.name,
        role_id: claims.role_id,
        iat: claims.iat,
        exp: claims.exp,
        claims: claims.rest,
    })
}

/// Accepts both base64 alphabets, with or without padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized)
}
