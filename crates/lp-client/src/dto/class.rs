//! Class DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Class`
#[derive(Debug, Serialize)]
pub struct GetClassesRequest<'a> {
    pub token: &'a str,
}

/// Aggregated class-level metrics
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReport {
    pub attendance: Option<f64>,
    pub workbook_completion: Option<f64>,
    pub workbook_score: Option<f64>,
    pub apo: f64,
    pub learning_objective: Option<f64>,
    pub total_session: u32,
}

/// One class as listed on the dashboard
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub closed_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub total_student: u32,
    #[serde(default)]
    pub report: Option<ClassReport>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
