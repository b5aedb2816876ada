use crate::models::{AppData, ChartBar, ChartResponse, Subject, SubjectView, SubjectsResponse};
use crate::schedule::{AttendanceSummary, date_key};
use chrono::NaiveDate;

const CHART_HEADROOM: u32 = 5;
const MAX_TICKS: u32 = 10;

pub fn subject_view(index: usize, subject: &Subject, today: NaiveDate) -> SubjectView {
    SubjectView {
        index,
        subject: subject.clone(),
        summary: AttendanceSummary::compute(subject, today),
    }
}

pub fn build_subjects_at(today: NaiveDate, data: &AppData) -> SubjectsResponse {
    let subjects = data
        .subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| subject_view(index, subject, today))
        .collect();

    SubjectsResponse {
        today: date_key(today),
        subjects,
    }
}

pub fn build_chart_at(today: NaiveDate, data: &AppData) -> ChartResponse {
    let mut bars = Vec::with_capacity(data.subjects.len());
    let mut max_total = 0u32;

    for subject in &data.subjects {
        let summary = AttendanceSummary::compute(subject, today);
        max_total = max_total.max(subject.total_days);
        bars.push(ChartBar {
            label: subject.name.clone(),
            attended: summary.attended,
            passed: summary.elapsed,
            total: subject.total_days,
            final_percent: summary.final_percent,
            final_standing: summary.final_standing,
        });
    }

    let suggested_max = max_total.saturating_add(CHART_HEADROOM);
    ChartResponse {
        bars,
        suggested_max,
        tick_step: tick_step(suggested_max),
    }
}

/// Grid spacing for the y axis: a multiple of 5 keeping at most `MAX_TICKS`
/// intervals up to `max`.
pub fn tick_step(max: u32) -> u32 {
    let raw = max.div_ceil(MAX_TICKS);
    raw.div_ceil(CHART_HEADROOM).max(1).saturating_mul(CHART_HEADROOM)
}
