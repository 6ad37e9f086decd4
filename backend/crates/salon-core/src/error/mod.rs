use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid appointment status: {value} {location}")]
    InvalidAppointmentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid board column: {value} {location}")]
    InvalidBoardColumn {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid clock time: {value} {location}")]
    InvalidClockTime {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid transaction kind: {value} {location}")]
    InvalidTransactionKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid movement kind: {value} {location}")]
    InvalidMovementKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Insufficient stock for {product}: requested {requested}, available {available} {location}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
