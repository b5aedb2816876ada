//! Rules deciding whether a date may enter a subject's attendance or holiday
//! list, and whether a registration form describes a usable subject.
//!
//! Nothing here touches storage. Callers persist only after a function returns `Ok`.

use crate::errors::AdmissionError;
use crate::models::{NewSubject, Subject};
use crate::schedule::{count_elapsed_sessions, date_key, is_weekday_label, parse_date, weekday_label};
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Removed { date: String },
    Replaced { old: String, new: String },
}

impl EditOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            EditOutcome::Removed { .. } => "removed",
            EditOutcome::Replaced { .. } => "replaced",
        }
    }
}

fn parse_candidate(candidate: &str) -> Result<NaiveDate, AdmissionError> {
    parse_date(candidate).ok_or_else(|| AdmissionError::InvalidDate {
        value: candidate.to_string(),
    })
}

fn check_window(
    subject: &Subject,
    date: NaiveDate,
    today: NaiveDate,
    kind: &'static str,
) -> Result<(), AdmissionError> {
    // An unreadable start date leaves no valid window.
    let in_window = parse_date(&subject.start_date)
        .is_some_and(|start| start <= date && date <= today);
    if in_window {
        Ok(())
    } else {
        Err(AdmissionError::OutsideWindow { kind })
    }
}

/// Validates `candidate` as a new attendance date and returns it in canonical form.
pub fn admit_attendance(
    subject: &Subject,
    candidate: &str,
    today: NaiveDate,
) -> Result<String, AdmissionError> {
    let date = parse_candidate(candidate)?;
    check_window(subject, date, today, "Attendance")?;

    let weekday = weekday_label(date);
    if !subject.class_days.iter().any(|d| d == weekday) {
        return Err(AdmissionError::NotAClassDay {
            subject: subject.name.clone(),
            weekday,
        });
    }

    let key = date_key(date);
    if subject.holidays.contains(&key) {
        return Err(AdmissionError::Holiday);
    }
    if subject.attended_dates.contains(&key) {
        return Err(AdmissionError::AlreadyAttended);
    }
    if subject.attended_dates.len() >= subject.total_days as usize {
        return Err(AdmissionError::SessionCapReached {
            subject: subject.name.clone(),
            total: subject.total_days,
        });
    }

    Ok(key)
}

/// Validates `candidate` as a new holiday: inside the enrollment window, not an
/// attended date and not already a holiday.
///
/// Unlike attendance, a holiday is not required to fall on a class day. This
/// asymmetry is a known inconsistency carried over as-is; a holiday on a day
/// without classes simply never affects the session count.
pub fn admit_holiday(
    subject: &Subject,
    candidate: &str,
    today: NaiveDate,
) -> Result<String, AdmissionError> {
    let date = parse_candidate(candidate)?;
    check_window(subject, date, today, "Holiday")?;

    let key = date_key(date);
    if subject.attended_dates.contains(&key) {
        return Err(AdmissionError::HolidayOnAttendedDate);
    }
    if subject.holidays.contains(&key) {
        return Err(AdmissionError::AlreadyHoliday);
    }

    Ok(key)
}

pub fn mark_attendance(
    subject: &mut Subject,
    candidate: &str,
    today: NaiveDate,
) -> Result<String, AdmissionError> {
    let date = admit_attendance(subject, candidate, today)?;
    subject.attended_dates.push(date.clone());
    Ok(date)
}

pub fn mark_holiday(
    subject: &mut Subject,
    candidate: &str,
    today: NaiveDate,
) -> Result<String, AdmissionError> {
    let date = admit_holiday(subject, candidate, today)?;
    subject.holidays.push(date.clone());
    Ok(date)
}

/// Removes `old` from the attendance list and, when `replacement` is non-blank,
/// records it in the same position.
///
/// The replacement is validated against a draft without `old`. The subject is only
/// written once validation passes, so a rejected replacement leaves `old` in place.
pub fn edit_attendance(
    subject: &mut Subject,
    old: &str,
    replacement: Option<&str>,
    today: NaiveDate,
) -> Result<EditOutcome, AdmissionError> {
    let old = old.trim();
    let Some(position) = subject.attended_dates.iter().position(|d| d == old) else {
        return Err(AdmissionError::NotRecorded {
            date: old.to_string(),
        });
    };

    let mut draft = subject.clone();
    let removed = draft.attended_dates.remove(position);

    let replacement = replacement.map(str::trim).filter(|value| !value.is_empty());
    let Some(candidate) = replacement else {
        subject.attended_dates = draft.attended_dates;
        return Ok(EditOutcome::Removed { date: removed });
    };

    let new = admit_attendance(&draft, candidate, today)?;
    draft.attended_dates.insert(position, new.clone());
    subject.attended_dates = draft.attended_dates;

    Ok(EditOutcome::Replaced { old: removed, new })
}

/// Validates a registration form and builds the subject it describes.
///
/// The attended count is turned into concrete dates: the first `attended` class
/// days on or after the start date.
pub fn register_subject(form: NewSubject, today: NaiveDate) -> Result<Subject, AdmissionError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AdmissionError::EmptyName);
    }

    let attended = u32::try_from(form.attended).map_err(|_| AdmissionError::InvalidAttendedCount)?;
    let total_days = u32::try_from(form.total_days)
        .ok()
        .filter(|total| *total > 0)
        .ok_or(AdmissionError::InvalidTotalDays)?;

    let start = parse_date(&form.start_date)
        .filter(|start| *start <= today)
        .ok_or(AdmissionError::InvalidStartDate)?;
    let start_date = date_key(start);

    let mut class_days: Vec<String> = Vec::with_capacity(form.class_days.len());
    for label in form.class_days {
        let label = label.trim().to_string();
        if !is_weekday_label(&label) {
            return Err(AdmissionError::UnknownClassDay { label });
        }
        if !class_days.contains(&label) {
            class_days.push(label);
        }
    }
    if class_days.is_empty() {
        return Err(AdmissionError::NoClassDays);
    }

    let passed = count_elapsed_sessions(&start_date, total_days, &class_days, &[], today, &[]);
    if attended > passed {
        return Err(AdmissionError::AttendedExceedsElapsed { attended, passed });
    }

    let attended_dates: Vec<String> = start
        .iter_days()
        .take_while(|day| *day <= today)
        .filter(|day| class_days.iter().any(|d| d == weekday_label(*day)))
        .take(attended as usize)
        .map(date_key)
        .collect();
    debug!(subject = name, attended = attended_dates.len(), "synthesized attendance");

    Ok(Subject {
        name: name.to_string(),
        start_date,
        total_days,
        class_days,
        holidays: Vec::new(),
        attended_dates,
    })
}
