//! Student DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Student`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStudentsRequest<'a> {
    pub token: &'a str,
    pub class_id: &'a str,
}

/// Classroom metrics for one student
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub attendance: Option<f64>,
    pub workbook_completion: Option<f64>,
    pub workbook_score: Option<f64>,
    pub apo: f64,
    pub learning_objective: Option<f64>,
    pub total_session: u32,
}

/// Home-learning app metrics for one student
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLearningReport {
    pub app_completion: Option<f64>,
    pub app_score: Option<f64>,
    pub app_time: Option<f64>,
    pub total_home_learning: u32,
}

/// One student as listed on the class roster
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub report: Option<StudentReport>,
    #[serde(default)]
    pub home_learning_report: Option<HomeLearningReport>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
