use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Reasons a registration, attendance or holiday entry is turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate { value: String },

    #[error("Please enter a subject name.")]
    EmptyName,

    #[error("Please enter a valid number of attended classes (0 or more).")]
    InvalidAttendedCount,

    #[error("Please enter a valid total number of classes (greater than 0).")]
    InvalidTotalDays,

    #[error("Please enter a valid start date (not in the future).")]
    InvalidStartDate,

    #[error("Please select at least one class day.")]
    NoClassDays,

    #[error("Unknown class day: {label}")]
    UnknownClassDay { label: String },

    #[error("{kind} date must be between the start date and today.")]
    OutsideWindow { kind: &'static str },

    #[error("No class scheduled for {subject} on {weekday}.")]
    NotAClassDay { subject: String, weekday: &'static str },

    #[error("Cannot mark attendance on a holiday.")]
    Holiday,

    #[error("Attendance already marked for this date.")]
    AlreadyAttended,

    #[error("This date is already marked as a holiday.")]
    AlreadyHoliday,

    #[error("Attendance is recorded on this date; remove it before marking a holiday.")]
    HolidayOnAttendedDate,

    #[error("All {total} classes of {subject} are already attended.")]
    SessionCapReached { subject: String, total: u32 },

    #[error("No attendance recorded on {date}.")]
    NotRecorded { date: String },

    #[error(
        "Attended classes ({attended}) cannot exceed days passed ({passed}) based on class days and start date."
    )]
    AttendedExceedsElapsed { attended: u32, passed: u32 },
}

impl AdmissionError {
    /// True for input that could not be understood at all, as opposed to a
    /// well-formed entry that breaks a scheduling rule.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            AdmissionError::InvalidDate { .. }
                | AdmissionError::EmptyName
                | AdmissionError::InvalidAttendedCount
                | AdmissionError::InvalidTotalDays
                | AdmissionError::InvalidStartDate
                | AdmissionError::NoClassDays
                | AdmissionError::UnknownClassDay { .. }
        )
    }
}
