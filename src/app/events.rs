// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;
use crate::models::ToastKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    Present(ToastKind),
    CyclePosition,
    DismissLatest,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // Help overlay swallows everything except closing it
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('i') => Some(AppEvent::Present(ToastKind::Info)),
            KeyCode::Char('s') => Some(AppEvent::Present(ToastKind::Success)),
            KeyCode::Char('w') => Some(AppEvent::Present(ToastKind::Warning)),
            KeyCode::Char('e') => Some(AppEvent::Present(ToastKind::Error)),
            KeyCode::Char('p') => Some(AppEvent::CyclePosition),
            KeyCode::Char('d') => Some(AppEvent::DismissLatest),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::Present(kind) => state.present_sample(kind),
            AppEvent::CyclePosition => state.cycle_position(),
            AppEvent::DismissLatest => {
                state.dismiss_latest();
            }
        }
    }
}
