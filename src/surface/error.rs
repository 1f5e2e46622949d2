// ABOUTME: Error types for toast presentation
// Defines error conditions that can occur when mounting toasts onto a surface

use crate::models::ToastId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToastError {
    #[error("Toast surface is closed")]
    SurfaceClosed,

    #[error("Mount point not found: {0}")]
    MountPointNotFound(ToastId),

    #[error("Mount point already occupied: {0}")]
    MountPointOccupied(ToastId),

    #[error("Toast duration must be at least one millisecond")]
    InvalidDuration,

    #[error("No tokio runtime available to schedule toast teardown")]
    NoRuntime,
}
