// ABOUTME: Data models for toast requests, placement and severity

pub mod toast;

pub use toast::{ToastId, ToastKind, ToastPosition, ToastRequest, DEFAULT_DURATION};
