// ABOUTME: Demo application state tracking live toast handles and placement

use tracing::{error, info};

use crate::config::{AppConfig, ToastConfig};
use crate::models::{ToastKind, ToastPosition, ToastRequest};
use crate::presenter::{Presenter, ToastHandle};
use crate::surface::{Surface, ToastError};

#[derive(Debug)]
pub struct AppState {
    pub surface: Surface,
    pub presenter: Presenter,
    /// Handles of toasts presented from the keyboard, oldest first.
    pub active_toasts: Vec<ToastHandle>,
    pub position: ToastPosition,
    pub help_visible: bool,
    pub should_quit: bool,
    pub toast_config: ToastConfig,
    presented_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let surface = Surface::new();
        Self {
            presenter: Presenter::with_width(surface.clone(), config.toast.width),
            surface,
            active_toasts: Vec::new(),
            position: config.toast.position,
            help_visible: false,
            should_quit: false,
            toast_config: config.toast.clone(),
            presented_count: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn cycle_position(&mut self) {
        self.position = self.position.next();
    }

    pub fn presented_count(&self) -> u64 {
        self.presented_count
    }

    /// Present `request` and keep its handle so it can be dismissed later.
    pub fn present(&mut self, request: ToastRequest) -> Result<(), ToastError> {
        let handle = self.presenter.present(request)?;
        self.presented_count += 1;
        self.active_toasts.push(handle);
        Ok(())
    }

    /// Present a sample toast of `kind` at the current position.
    pub fn present_sample(&mut self, kind: ToastKind) {
        let message = format!("{} toast #{}", kind.label(), self.presented_count + 1);
        let request = self
            .toast_config
            .request(message)
            .with_kind(kind)
            .with_position(self.position);

        if let Err(e) = self.present(request) {
            error!("Failed to present {} toast: {}", kind, e);
        }
    }

    /// Dismiss the most recently presented toast that is still on screen.
    pub fn dismiss_latest(&mut self) -> bool {
        self.prune_expired();
        self.active_toasts.pop().is_some_and(ToastHandle::dismiss)
    }

    /// Forget handles whose toasts have already been torn down.
    pub fn prune_expired(&mut self) {
        self.active_toasts.retain(ToastHandle::is_mounted);
    }

    pub fn visible_toast_count(&self) -> usize {
        self.surface.len()
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: AppState::with_config(config),
        }
    }

    pub fn tick(&mut self) {
        self.state.prune_expired();
    }

    /// Whether a toast appeared or disappeared since the last draw.
    pub fn needs_ui_refresh(&self) -> bool {
        self.state.surface.take_needs_redraw()
    }

    pub fn shutdown(&mut self) {
        info!(
            "Shutting down with {} toast(s) on screen",
            self.state.visible_toast_count()
        );
        self.state.active_toasts.clear();
        self.state.surface.close();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
