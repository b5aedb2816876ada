use crate::schedule::{AttendanceSummary, Standing};
use serde::{Deserialize, Serialize};

/// One tracked course. Dates are ISO `YYYY-MM-DD` strings and class days are
/// English weekday names, matching the persisted format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    pub start_date: String,
    pub total_days: u32,
    #[serde(default)]
    pub class_days: Vec<String>,
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default)]
    pub attended_dates: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub theme: Theme,
}

/// Registration form as submitted by the page.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub attended: i64,
    pub total_days: i64,
    pub start_date: String,
    #[serde(default)]
    pub class_days: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct EditAttendanceRequest {
    pub old_date: String,
    #[serde(default)]
    pub new_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct SubjectView {
    pub index: usize,
    #[serde(flatten)]
    pub subject: Subject,
    pub summary: AttendanceSummary,
}

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub today: String,
    pub subjects: Vec<SubjectView>,
}

#[derive(Debug, Serialize)]
pub struct EditAttendanceResponse {
    pub outcome: String,
    pub subject: SubjectView,
}

#[derive(Debug, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub attended: u32,
    pub passed: u32,
    pub total: u32,
    pub final_percent: f64,
    pub final_standing: Standing,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub bars: Vec<ChartBar>,
    pub suggested_max: u32,
    pub tick_step: u32,
}
