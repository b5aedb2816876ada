use crate::admission::{edit_attendance, mark_attendance, mark_holiday, register_subject};
use crate::errors::{AdmissionError, AppError};
use crate::models::{
    AppData, ChartResponse, DateRequest, EditAttendanceRequest, EditAttendanceResponse,
    NewSubject, Subject, SubjectView, SubjectsResponse, ThemeRequest, ThemeResponse,
};
use crate::state::AppState;
use crate::stats::{build_chart_at, build_subjects_at, subject_view};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&state.today().to_string(), data.theme))
}

pub async fn list_subjects(State(state): State<AppState>) -> Json<SubjectsResponse> {
    let data = state.data.lock().await;
    Json(build_subjects_at(state.today(), &data))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    let data = state.data.lock().await;
    Json(build_chart_at(state.today(), &data))
}

pub async fn create_subject(
    State(state): State<AppState>,
    Json(form): Json<NewSubject>,
) -> Result<Json<SubjectView>, AppError> {
    let today = state.today();
    let subject = register_subject(form, today).map_err(rejected)?;

    let mut data = state.data.lock().await;
    let mut draft = data.clone();
    draft.subjects.push(subject);
    commit(&state, &mut data, draft).await?;

    let index = data.subjects.len() - 1;
    info!(subject = %data.subjects[index].name, index, "registered subject");
    Ok(Json(subject_view(index, &data.subjects[index], today)))
}

/// Replaces a subject with a freshly registered one built from the edited form.
pub async fn update_subject(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(form): Json<NewSubject>,
) -> Result<Json<SubjectView>, AppError> {
    let today = state.today();
    let mut data = state.data.lock().await;
    subject_at(&data, index)?;

    let subject = register_subject(form, today).map_err(rejected)?;
    let mut draft = data.clone();
    draft.subjects[index] = subject;
    commit(&state, &mut data, draft).await?;

    info!(subject = %data.subjects[index].name, index, "updated subject");
    Ok(Json(subject_view(index, &data.subjects[index], today)))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SubjectsResponse>, AppError> {
    let mut data = state.data.lock().await;
    subject_at(&data, index)?;

    let mut draft = data.clone();
    let removed = draft.subjects.remove(index);
    commit(&state, &mut data, draft).await?;

    info!(subject = %removed.name, index, "deleted subject");
    Ok(Json(build_subjects_at(state.today(), &data)))
}

pub async fn add_attendance(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<SubjectView>, AppError> {
    let (date, view) = apply_to_subject(&state, index, |subject, today| {
        mark_attendance(subject, &payload.date, today)
    })
    .await?;

    info!(subject = %view.subject.name, %date, "marked attendance");
    Ok(Json(view))
}

pub async fn update_attendance(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<EditAttendanceRequest>,
) -> Result<Json<EditAttendanceResponse>, AppError> {
    let (outcome, view) = apply_to_subject(&state, index, |subject, today| {
        edit_attendance(subject, &payload.old_date, payload.new_date.as_deref(), today)
    })
    .await?;

    info!(subject = %view.subject.name, ?outcome, "edited attendance");
    Ok(Json(EditAttendanceResponse {
        outcome: outcome.label().to_string(),
        subject: view,
    }))
}

pub async fn add_holiday(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<SubjectView>, AppError> {
    let (date, view) = apply_to_subject(&state, index, |subject, today| {
        mark_holiday(subject, &payload.date, today)
    })
    .await?;

    info!(subject = %view.subject.name, %date, "marked holiday");
    Ok(Json(view))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let data = state.data.lock().await;
    Json(ThemeResponse { theme: data.theme })
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let mut data = state.data.lock().await;
    let draft = AppData {
        theme: payload.theme,
        ..data.clone()
    };
    commit(&state, &mut data, draft).await?;
    Ok(Json(ThemeResponse { theme: data.theme }))
}

/// Runs one admission against a copy of the subject at `index`. The shared
/// aggregate only changes once the admitted copy has been written to disk.
async fn apply_to_subject<T, F>(
    state: &AppState,
    index: usize,
    apply: F,
) -> Result<(T, SubjectView), AppError>
where
    F: FnOnce(&mut Subject, NaiveDate) -> Result<T, AdmissionError>,
{
    let today = state.today();
    let mut data = state.data.lock().await;
    subject_at(&data, index)?;

    let mut draft = data.clone();
    let value = apply(&mut draft.subjects[index], today).map_err(rejected)?;
    commit(state, &mut data, draft).await?;

    Ok((value, subject_view(index, &data.subjects[index], today)))
}

/// Writes `draft` to disk and, only if that succeeds, makes it the live aggregate.
async fn commit(state: &AppState, data: &mut AppData, draft: AppData) -> Result<(), AppError> {
    persist_data(&state.data_path, &draft).await?;
    *data = draft;
    Ok(())
}

fn subject_at(data: &AppData, index: usize) -> Result<&Subject, AppError> {
    data.subjects
        .get(index)
        .ok_or_else(|| AppError::not_found(format!("no subject at index {index}")))
}

fn rejected(err: AdmissionError) -> AppError {
    warn!(malformed = err.is_malformed(), "rejected: {err}");
    AppError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use axum::http::StatusCode;
    use std::path::PathBuf;

    fn state_at(data_path: PathBuf) -> AppState {
        let data = AppData {
            subjects: vec![Subject {
                name: "Geography".to_string(),
                start_date: "2024-01-01".to_string(),
                total_days: 30,
                class_days: vec!["Monday".to_string(), "Wednesday".to_string()],
                holidays: Vec::new(),
                attended_dates: vec!["2024-01-01".to_string()],
            }],
            ..AppData::default()
        };
        AppState::new(data_path, data).with_today(NaiveDate::from_ymd_opt(2024, 1, 17))
    }

    fn temp_file() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("attendance_handlers_{}_{nanos}.json", std::process::id()))
    }

    fn date(value: &str) -> Json<DateRequest> {
        Json(DateRequest {
            date: value.to_string(),
        })
    }

    #[tokio::test]
    async fn failed_write_keeps_attendance_unchanged() {
        // A directory cannot be written as a file.
        let state = state_at(std::env::temp_dir());

        let err = add_attendance(State(state.clone()), Path(0), date("2024-01-15"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let data = state.data.lock().await;
        assert_eq!(data.subjects[0].attended_dates, vec!["2024-01-01"]);
    }

    #[tokio::test]
    async fn failed_write_keeps_collection_and_theme_unchanged() {
        let state = state_at(std::env::temp_dir());

        let err = delete_subject(State(state.clone()), Path(0)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let err = set_theme(State(state.clone()), Json(ThemeRequest { theme: Theme::Dark }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let data = state.data.lock().await;
        assert_eq!(data.subjects.len(), 1);
        assert_eq!(data.theme, Theme::Light);
    }

    #[tokio::test]
    async fn successful_write_updates_memory_and_disk() {
        let path = temp_file();
        let state = state_at(path.clone());

        let Json(view) = add_attendance(State(state.clone()), Path(0), date("2024-01-15"))
            .await
            .unwrap();
        assert_eq!(view.subject.attended_dates, vec!["2024-01-01", "2024-01-15"]);

        let reloaded = crate::storage::load_data(&path).await;
        assert_eq!(reloaded.subjects, state.data.lock().await.subjects);
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn rejected_admission_is_a_bad_request() {
        let state = state_at(temp_file());

        let err = add_holiday(State(state.clone()), Path(0), date("2024-01-01"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = add_attendance(State(state), Path(3), date("2024-01-15"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
