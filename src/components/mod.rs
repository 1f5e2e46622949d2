// ABOUTME: UI components for the toast surface, demo layout and help overlay

use ratatui::{buffer::Buffer, layout::Rect};

pub mod help;
pub mod layout;
pub mod toast;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use toast::{ToastComponent, DEFAULT_TOAST_WIDTH};

/// A visual unit mounted into a single container on the surface.
///
/// Units render synchronously on every pass and are destroyed exactly once
/// when their toast is torn down.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationUnit: Send {
    /// Draw the unit somewhere inside `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Release whatever the unit holds. Nothing is rendered afterwards.
    fn destroy(&mut self);
}
