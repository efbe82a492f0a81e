//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time format: '{0}' (expected HH:MM or HH:MM:SS)")]
    InvalidTimeFormat(String),

    #[error("Invalid day of week: '{0}'")]
    InvalidDay(String),

    #[error("Invalid role: '{0}'")]
    InvalidRole(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
