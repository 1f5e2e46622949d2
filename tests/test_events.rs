// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct toast actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use toast_box::app::{AppEvent, AppState, EventHandler};
use toast_box::{ToastKind, ToastPosition};

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn test_quit_key_events() {
    let state = AppState::default();

    for event in [
        create_key_event(KeyCode::Char('q')),
        create_key_event(KeyCode::Esc),
        create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert_eq!(EventHandler::handle_key_event(event, &state), Some(AppEvent::Quit));
    }
}

#[test]
fn test_toast_key_events() {
    let state = AppState::default();

    let cases = [
        ('i', ToastKind::Info),
        ('s', ToastKind::Success),
        ('w', ToastKind::Warning),
        ('e', ToastKind::Error),
    ];
    for (key, kind) in cases {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(KeyCode::Char(key)), &state),
            Some(AppEvent::Present(kind))
        );
    }
}

#[test]
fn test_unmapped_key_is_ignored() {
    let state = AppState::default();
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('x')), &state),
        None
    );
}

#[test]
fn test_help_overlay_captures_keys() {
    let mut state = AppState::default();
    state.toggle_help();

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('i')), &state),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &state),
        Some(AppEvent::ToggleHelp)
    );
}

#[test]
fn test_cycle_position_event() {
    let mut state = AppState::default();
    assert_eq!(state.position, ToastPosition::BottomRight);

    EventHandler::process_event(AppEvent::CyclePosition, &mut state);
    assert_eq!(state.position, ToastPosition::BottomLeft);
}

#[tokio::test]
async fn test_present_event_mounts_toast_at_current_position() {
    let mut state = AppState::default();
    state.position = ToastPosition::TopRight;

    EventHandler::process_event(AppEvent::Present(ToastKind::Success), &mut state);

    assert_eq!(state.visible_toast_count(), 1);
    assert_eq!(state.presented_count(), 1);
    let request = state.active_toasts[0].request();
    assert_eq!(request.kind, ToastKind::Success);
    assert_eq!(request.position, ToastPosition::TopRight);
    assert_eq!(request.message, "Success toast #1");
}

#[tokio::test]
async fn test_dismiss_event_removes_latest_toast() {
    let mut state = AppState::default();
    EventHandler::process_event(AppEvent::Present(ToastKind::Info), &mut state);
    EventHandler::process_event(AppEvent::Present(ToastKind::Error), &mut state);
    let first = state.active_toasts[0].id();

    EventHandler::process_event(AppEvent::DismissLatest, &mut state);

    assert_eq!(state.surface.ids(), vec![first]);
    assert_eq!(state.active_toasts.len(), 1);
}

#[tokio::test]
async fn test_dismiss_with_nothing_on_screen() {
    let mut state = AppState::default();
    assert!(!state.dismiss_latest());
}

#[test]
fn test_present_outside_runtime_is_logged_not_fatal() {
    let mut state = AppState::default();
    EventHandler::process_event(AppEvent::Present(ToastKind::Info), &mut state);

    assert_eq!(state.visible_toast_count(), 0);
    assert_eq!(state.presented_count(), 0);
}

#[test]
fn test_quit_event_sets_flag() {
    let mut state = AppState::default();
    EventHandler::process_event(AppEvent::Quit, &mut state);
    assert!(state.should_quit);
}
