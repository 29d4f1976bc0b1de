// ============================================================================
// API CLIENT - One typed call per backend endpoint
// ============================================================================
// Each endpoint describes its request and response shape; `ApiClient::call`
// does the round trip and turns every failure into an `ErrorMessage`.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::{ErrorMessage, JudgeResult, Overview, PagedData, User, UserInfo};
use crate::services::errors::resolve_error;
use crate::services::headers::{build_headers, Headers, HEADER_USER_ID};
use crate::services::transport::{GlooTransport, HttpRequest, Method, Transport};
use crate::utils::constants::api_path;

/// Typed request/response contract shared by every endpoint.
pub trait Endpoint {
    type Response: DeserializeOwned;

    const METHOD: Method = Method::Get;

    fn path(&self) -> &str;

    /// Anonymous GETs send no headers so cross-origin calls skip preflight.
    fn headers(&self) -> Headers {
        Headers::new()
    }

    /// Query parameters; `None` values are left out.
    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        Vec::new()
    }

    /// Value to resolve with when the server answers 2xx but not 200.
    fn fallback(&self) -> Option<Self::Response> {
        None
    }
}

/// Search filter for the admin user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub user_id: Option<String>,
    pub name: Option<String>,
}

/// Search filter for the submission history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionFilter {
    pub problem_id: Option<i64>,
    pub title: Option<String>,
}

pub struct GetAllUsers<'a> {
    pub page: u32,
    pub limit: u32,
    pub filter: UserFilter,
    pub user_info: &'a UserInfo,
}

impl Endpoint for GetAllUsers<'_> {
    type Response = PagedData<User>;

    fn path(&self) -> &str {
        api_path::USER_ADMIN
    }

    fn headers(&self) -> Headers {
        build_headers(Some(self.user_info))
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("page", Some(self.page.to_string())),
            ("limit", Some(self.limit.to_string())),
            ("userId", self.filter.user_id.clone()),
            ("name", self.filter.name.clone()),
        ]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(PagedData::empty())
    }
}

pub struct GetProfile<'a> {
    pub user_id: &'a str,
}

impl Endpoint for GetProfile<'_> {
    type Response = User;

    fn path(&self) -> &str {
        api_path::PROFILE
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("userId", Some(self.user_id.to_string()))]
    }
}

pub struct GetOverview<'a> {
    pub user_id: &'a str,
    pub year: i32,
}

impl Endpoint for GetOverview<'_> {
    type Response = Overview;

    fn path(&self) -> &str {
        api_path::OVERVIEW
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("userId", Some(self.user_id.to_string())),
            ("year", Some(self.year.to_string())),
        ]
    }
}

pub struct GetSolutions<'a> {
    pub page: u32,
    pub limit: u32,
    pub user_info: &'a UserInfo,
    pub filter: Option<SolutionFilter>,
}

impl Endpoint for GetSolutions<'_> {
    type Response = PagedData<JudgeResult>;

    fn path(&self) -> &str {
        api_path::HISTORY
    }

    fn headers(&self) -> Headers {
        let mut headers = build_headers(Some(self.user_info));
        headers.insert(HEADER_USER_ID.to_string(), self.user_info.user_id.clone());
        headers
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        let filter = self.filter.clone().unwrap_or_default();
        vec![
            ("page", Some(self.page.to_string())),
            ("limit", Some(self.limit.to_string())),
            ("problemId", filter.problem_id.map(|id| id.to_string())),
            ("title", filter.title),
        ]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(PagedData::empty())
    }
}

/// API client - HTTP only, no state besides the backend URL
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    /// Browser client pointed at the configured backend.
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url(), GlooTransport::new())
    }

    pub fn with_transport(base_url: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport: Rc::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_for<E: Endpoint>(&self, endpoint: &E) -> HttpRequest {
        let query = endpoint
            .params()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect();

        HttpRequest {
            method: E::METHOD,
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers: endpoint.headers(),
            query,
            body: None,
        }
    }

    /// Issues one request for `endpoint`.
    pub async fn call<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, ErrorMessage> {
        let request = self.request_for(endpoint);
        log::debug!("🌐 {} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(resolve_error)?;

        if response.status != 200 {
            if let Some(fallback) = endpoint.fallback() {
                log::warn!(
                    "⚠️ {} answered {}, using empty result",
                    endpoint.path(),
                    response.status
                );
                return Ok(fallback);
            }
        }

        serde_json::from_str::<E::Response>(&response.body).map_err(|e| {
            log::error!("❌ Parse error on {}: {}", endpoint.path(), e);
            ErrorMessage::client(format!("Parse error: {}", e))
        })
    }

    /// Paged user list (admin only)
    pub async fn get_all_users(
        &self,
        page: u32,
        limit: u32,
        filter: UserFilter,
        user_info: &UserInfo,
    ) -> Result<PagedData<User>, ErrorMessage> {
        self.call(&GetAllUsers {
            page,
            limit,
            filter,
            user_info,
        })
        .await
    }

    /// Public profile of one user
    pub async fn get_profile(&self, user_id: &str) -> Result<User, ErrorMessage> {
        self.call(&GetProfile { user_id }).await
    }

    /// Activity overview of one user for `year`
    pub async fn get_overview(&self, user_id: &str, year: i32) -> Result<Overview, ErrorMessage> {
        self.call(&GetOverview { user_id, year }).await
    }

    /// Submission history of the logged in user
    pub async fn get_solutions(
        &self,
        page: u32,
        limit: u32,
        user_info: &UserInfo,
        filter: Option<SolutionFilter>,
    ) -> Result<PagedData<JudgeResult>, ErrorMessage> {
        self.call(&GetSolutions {
            page,
            limit,
            user_info,
            filter,
        })
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
