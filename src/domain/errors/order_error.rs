//! Booking error types.

use thiserror::Error;

/// Errors raised while configuring or confirming a booking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum OrderError {
    #[error("unknown service: {id}")]
    InvalidServiceId { id: String },

    #[error("unknown pickup date: {label}")]
    InvalidPickupDate { label: String },

    #[error("unknown pickup time slot: {label}")]
    InvalidTimeSlot { label: String },

    #[error("select a service, pickup date and time slot before booking")]
    IncompleteDraft,
}

impl OrderError {
    /// Creates invalid service error.
    #[must_use]
    pub fn invalid_service(id: impl Into<String>) -> Self {
        Self::InvalidServiceId { id: id.into() }
    }

    /// Creates invalid pickup date error.
    #[must_use]
    pub fn invalid_date(label: impl Into<String>) -> Self {
        Self::InvalidPickupDate {
            label: label.into(),
        }
    }

    /// Creates invalid time slot error.
    #[must_use]
    pub fn invalid_slot(label: impl Into<String>) -> Self {
        Self::InvalidTimeSlot {
            label: label.into(),
        }
    }
}
