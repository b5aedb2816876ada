use crate::models::Subject;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::error;

/// Minimum attendance a subject requires, in percent.
pub const MIN_ATTENDANCE_PERCENT: f64 = 75.0;

pub const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    label_of(date.weekday())
}

fn label_of(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_sunday() as usize]
}

pub fn is_weekday_label(value: &str) -> bool {
    WEEKDAY_LABELS.contains(&value)
}

/// Counts the class sessions held between `start_date` and `reference`, both inclusive.
///
/// Days whose weekday is not in `class_days`, or whose date is listed in `holidays`,
/// are skipped. The walk stops once `total_days` sessions have been seen. The result
/// is never lower than the number of recorded attendances and never above
/// `total_days`.
///
/// An unparseable start date is logged and counts as zero sessions.
pub fn count_elapsed_sessions(
    start_date: &str,
    total_days: u32,
    class_days: &[String],
    holidays: &[String],
    reference: NaiveDate,
    attended_dates: &[String],
) -> u32 {
    let Some(start) = parse_date(start_date) else {
        error!("invalid start date: {start_date:?}");
        return 0;
    };
    if start > reference {
        return 0;
    }

    let mut passed = 0u32;
    for day in start.iter_days().take_while(|day| *day <= reference) {
        if passed >= total_days {
            break;
        }
        let label = weekday_label(day);
        let key = date_key(day);
        if class_days.iter().any(|d| d == label) && !holidays.contains(&key) {
            passed += 1;
        }
    }

    let attended = u32::try_from(attended_dates.len()).unwrap_or(u32::MAX);
    attended.max(passed).min(total_days)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Low,
    High,
}

impl Standing {
    pub fn classify(percent: f64) -> Self {
        if percent < MIN_ATTENDANCE_PERCENT {
            Standing::Low
        } else {
            Standing::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub attended: u32,
    pub elapsed: u32,
    pub realized_percent: f64,
    pub realized_standing: Standing,
    pub final_percent: f64,
    pub final_standing: Standing,
    pub sessions_needed: u32,
    pub sessions_remaining: u32,
}

impl AttendanceSummary {
    pub fn compute(subject: &Subject, reference: NaiveDate) -> Self {
        let attended = u32::try_from(subject.attended_dates.len()).unwrap_or(u32::MAX);
        let elapsed = count_elapsed_sessions(
            &subject.start_date,
            subject.total_days,
            &subject.class_days,
            &subject.holidays,
            reference,
            &subject.attended_dates,
        );

        let realized_percent = percent(attended, elapsed);
        let final_percent = percent(attended, subject.total_days);

        Self {
            attended,
            elapsed,
            realized_percent,
            realized_standing: Standing::classify(realized_percent),
            final_percent,
            final_standing: Standing::classify(final_percent),
            sessions_needed: sessions_needed(subject.total_days, attended),
            sessions_remaining: subject.total_days.saturating_sub(elapsed),
        }
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

/// `max(0, ceil(0.75 * total - attended))` in integer arithmetic.
pub fn sessions_needed(total_days: u32, attended: u32) -> u32 {
    let required = (u64::from(total_days) * 3).div_ceil(4);
    required.saturating_sub(u64::from(attended)) as u32
}
