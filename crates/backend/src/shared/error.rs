use axum::http::StatusCode;
use thiserror::Error;

/// Ошибки входных параметров дашборда
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("invalid {field}: '{value}' is not a date")]
    InvalidDate { field: &'static str, value: String },

    #[error("unknown control: {0}")]
    UnknownControl(String),

    #[error("control {control_id} expects a {expected} value")]
    UnexpectedControlValue {
        control_id: String,
        expected: &'static str,
    },

    #[error("unknown tab: {0}")]
    UnknownTab(String),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidDate { .. } | DashboardError::UnexpectedControlValue { .. } => {
                StatusCode::BAD_REQUEST
            }
            DashboardError::UnknownControl(_) | DashboardError::UnknownTab(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }
}
