//! Home-learning progress DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Student/progress`.
///
/// The backend's field really is spelled `choosenDate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHomeLearningRequest<'a> {
    pub token: &'a str,
    pub class_id: &'a str,
    pub choosen_date: NaiveDate,
}

/// One home-learning record for a student on a given date.
///
/// Identity is `id`, unique within a class + date query. Records are
/// never mutated client-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLearningRecord {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    #[serde(default)]
    pub student_avatar: Option<String>,
    pub class_id: i64,
    pub assign_date: DateTime<Utc>,
    pub cms_resource_id: i64,
    pub cms_home_learning_id: i64,
    pub app_completion: Option<f64>,
    pub app_score: Option<f64>,
    pub app_time: Option<f64>,
    pub skill: String,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_session: Option<String>,
    pub unit_name: Option<String>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub student_class_id: i64,
}

impl HomeLearningRecord {
    /// A record is incomplete while either app metric is still missing.
    /// Incomplete records sort ahead of complete ones on the dashboard.
    pub fn is_incomplete(&self) -> bool {
        self.app_completion.is_none() || self.app_score.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosen_date_spelling_on_the_wire() {
        let request = GetHomeLearningRequest {
            token: "tok",
            class_id: "42",
            choosen_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["choosenDate"], "2025-06-02");
        assert_eq!(json["classId"], "42");
    }
}
