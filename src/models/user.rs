use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account role, as encoded in the `roleId` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    UserAdmin,
    ProblemAdmin,
}

impl Role {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Role::Admin),
            1 => Some(Role::User),
            2 => Some(Role::UserAdmin),
            3 => Some(Role::ProblemAdmin),
            _ => None,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Role::Admin => 0,
            Role::User => 1,
            Role::UserAdmin => 2,
            Role::ProblemAdmin => 3,
        }
    }

    /// Admin holds every role; everyone holds `User`.
    pub fn grants(&self, other: Role) -> bool {
        *self == Role::Admin || *self == other || other == Role::User
    }
}

/// Identity decoded from a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub sub: String,
    /// Always equal to `sub`
    pub user_id: String,
    /// Raw token this identity was decoded from
    pub token: String,
    pub name: Option<String>,
    pub role_id: Option<i32>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
    /// Remaining claims, untouched
    #[serde(default)]
    pub claims: Map<String, Value>,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        self.role_id.and_then(Role::from_id)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role().map(|r| r.grants(role)).unwrap_or(false)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| exp <= now).unwrap_or(false)
    }
}

/// Public user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub uid: Option<i64>,
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub role_id: Option<i32>,
    #[serde(default)]
    pub create_at: Option<i64>,
}

/// Activity summary of one user for one year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub year: Option<i32>,
    pub total: u64,
    pub passed: u64,
    pub preference: Vec<LanguageCount>,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageCount {
    pub language: i32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub date: String,
    pub count: u64,
}
