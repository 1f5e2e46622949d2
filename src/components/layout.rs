// ABOUTME: Main layout component with status pane, bottom menu bar and the toast overlay

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::HelpComponent;
use crate::app::AppState;

pub struct LayoutComponent {
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        self.render_status(frame, main_chunks[0], state);
        self.render_menu_bar(frame, main_chunks[1]);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        // Toasts sit above every other overlay
        let area = frame.size();
        state.surface.render(area, frame.buffer_mut());
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(vec![
                Span::styled("Position: ", label),
                Span::raw(state.position.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Duration: ", label),
                Span::raw(format!("{} ms", state.toast_config.duration_ms)),
            ]),
            Line::from(vec![
                Span::styled("Visible:  ", label),
                Span::raw(state.visible_toast_count().to_string()),
            ]),
            Line::from(vec![
                Span::styled("Shown:    ", label),
                Span::raw(state.presented_count().to_string()),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Toast-Box")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[i]nfo [s]uccess [w]arning [e]rror [p]osition [d]ismiss [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
