//! Fixed-width table rendering for the dashboard views.
//!
//! Missing metrics render as `------`, matching what teachers see for a
//! student who has not opened the app yet.

use chrono::{DateTime, Utc};
use lp_client::dto::{ClassSummary, HomeLearningRecord, StudentSummary};

const PLACEHOLDER: &str = "------";

pub fn classes_table(classes: &[ClassSummary]) {
    println!(
        "{:<6} {:<28} {:<10} {:<10} {:>8}  {:<10} {:<10}",
        "ID", "NAME", "CODE", "STATUS", "STUDENTS", "START", "END"
    );
    println!("{}", "-".repeat(90));
    for class in classes {
        println!(
            "{:<6} {:<28} {:<10} {:<10} {:>8}  {:<10} {:<10}",
            class.id,
            truncate(&class.name, 28),
            class.code,
            class.status,
            class.total_student,
            class.start_date.format("%Y-%m-%d"),
            class.end_date.format("%Y-%m-%d"),
        );
    }
}

pub fn students_table(students: &[StudentSummary]) {
    println!(
        "{:<6} {:<24} {:<10} {:<6} {:>12} {:>10} {:>10}",
        "ID", "NAME", "CODE", "GENDER", "COMPLETION %", "SCORE", "TIME (M)"
    );
    println!("{}", "-".repeat(86));
    for student in students {
        let report = student.home_learning_report.as_ref();
        println!(
            "{:<6} {:<24} {:<10} {:<6} {:>12} {:>10} {:>10}",
            student.id,
            truncate(&student.name, 24),
            student.code,
            student.gender,
            fmt_metric(report.and_then(|r| r.app_completion)),
            fmt_metric(report.and_then(|r| r.app_score)),
            fmt_metric(report.and_then(|r| r.app_time)),
        );
    }
}

pub fn progress_table(records: &[HomeLearningRecord]) {
    println!(
        "{:<24} {:<14} {:<20} {:>12} {:>8} {:>9}  {:<13}",
        "STUDENT", "SKILL", "UNIT", "COMPLETION %", "SCORE", "TIME (M)", "COMPLETED"
    );
    println!("{}", "-".repeat(108));
    for record in records {
        println!(
            "{:<24} {:<14} {:<20} {:>12} {:>8} {:>9}  {:<13}",
            truncate(&record.student_name, 24),
            truncate(&record.skill, 14),
            truncate(record.unit_name.as_deref().unwrap_or(PLACEHOLDER), 20),
            fmt_metric(record.app_completion),
            fmt_metric(record.app_score),
            fmt_metric(record.app_time),
            fmt_date(record.completed_at),
        );
    }
}

pub fn page_footer(page: u32, total_pages: u32) {
    println!();
    println!("Page {} of {}", page, total_pages.max(1));
}

fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => PLACEHOLDER.to_string(),
    }
}

fn fmt_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(v) => v.format("%b %d, %Y").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
