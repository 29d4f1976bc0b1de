use std::collections::BTreeMap;

use crate::models::UserInfo;
use crate::utils::constants::CONTENT_TYPE_JSON;

pub type Headers = BTreeMap<String, String>;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_TOKEN: &str = "token";
pub const HEADER_USER_ID: &str = "userId";

/// Request headers for an optional identity.
pub fn build_headers(user_info: Option<&UserInfo>) -> Headers {
    let mut headers = Headers::new();
    headers.insert(HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string());

    if let Some(info) = user_info {
        headers.insert(HEADER_TOKEN.to_string(), info.token.clone());
    }

    headers
}
