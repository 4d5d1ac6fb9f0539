//! Errors raised while bringing up the services-access layer.

use crate::status::Status;

/// An error preventing the services-access layer from being initialized.
///
/// These only occur when the firmware breaks its calling contract, so they are fatal to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The firmware passed a null image handle.
    #[error("image handle is null")]
    NullImageHandle,
    /// The firmware passed a null system table.
    #[error("services table is null")]
    NullServicesTable,
    /// The firmware's own services-access setup failed.
    #[error("services initialization failed: {0}")]
    Runtime(Status),
}

impl InitError {
    /// Returns the status code to report back to the firmware for this error.
    pub fn status(&self) -> Status {
        match self {
            InitError::NullImageHandle | InitError::NullServicesTable => Status::InvalidParameter,
            InitError::Runtime(status) => *status,
        }
    }
}
