//! API handlers for Voyagera REST endpoints

pub mod health;
pub mod openapi;
pub mod tourists;
pub mod uploads;

use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run DTO validation before any store interaction. The caller gets the
/// generic message; the field-level detail only goes to the log.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|e| {
        tracing::debug!("Validation failed: {}", e);
        AppError::Validation("Invalid inputs passed, please check your data.".to_string())
    })
}
