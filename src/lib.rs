// ABOUTME: Library crate for Toast-Box exposing the toast presenter and its surface

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod presenter;
pub mod surface;

pub use models::{ToastId, ToastKind, ToastPosition, ToastRequest};
pub use presenter::{show_toast, Presenter, ToastGuard, ToastHandle};
pub use surface::{Surface, ToastError};
