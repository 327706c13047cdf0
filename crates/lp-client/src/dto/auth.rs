//! Login and profile DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/Login/logout`
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub username: &'a str,
}

/// Staff record attached to a profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub is_super_admin: bool,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub token: String,
    pub id: i64,
    pub email: String,
    pub status: String,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub staff: Option<Staff>,
}

impl Profile {
    /// Display name shown in the dashboard header: the staff name when
    /// present, otherwise the account email.
    pub fn display_name(&self) -> &str {
        self.staff
            .as_ref()
            .map(|staff| staff.name.as_str())
            .unwrap_or(&self.email)
    }
}
