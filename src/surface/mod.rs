// ABOUTME: Rendering surface that toasts are mounted into and removed from
// Plays the role of the page: an ordered set of containers drawn over the frame

pub mod error;
pub mod tree;

pub use error::ToastError;
pub use tree::Surface;
