/// localStorage key for the persisted theme name
pub const STORAGE_KEY_THEME: &str = "theme";

/// localStorage key for the persisted session token
pub const STORAGE_KEY_TOKEN: &str = "userToken";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Backend endpoint paths, relative to the backend URL
pub mod api_path {
    /// Paged user list (admin only)
    pub const USER_ADMIN: &str = "/api/manager/user";
    /// Public user profile
    pub const PROFILE: &str = "/api/core/user/profile";
    /// Yearly activity overview
    pub const OVERVIEW: &str = "/api/core/user/overview";
    /// Submission history of the logged in user
    pub const HISTORY: &str = "/api/core/solution/history";
}
