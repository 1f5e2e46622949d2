// ABOUTME: Toast component rendering a kind-colored box at one corner of the frame

use ratatui::{
    buffer::Buffer,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tracing::debug;

use super::PresentationUnit;
use crate::models::ToastRequest;

/// Width used when the caller does not configure one.
pub const DEFAULT_TOAST_WIDTH: u16 = 40;

pub struct ToastComponent {
    request: ToastRequest,
    width: u16,
    destroyed: bool,
}

impl ToastComponent {
    pub fn new(request: ToastRequest) -> Self {
        Self::with_width(request, DEFAULT_TOAST_WIDTH)
    }

    pub fn with_width(request: ToastRequest, width: u16) -> Self {
        Self {
            request,
            width: width.max(3),
            destroyed: false,
        }
    }

    pub fn request(&self) -> &ToastRequest {
        &self.request
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Rows needed for the message at the given box width, borders included.
    fn height_for(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(2).max(1));
        let rows: usize = self
            .request
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(inner).max(1))
            .sum();
        u16::try_from(rows.max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl PresentationUnit for ToastComponent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.destroyed || area.width == 0 || area.height == 0 {
            return;
        }

        let width = self.width.min(area.width);
        let toast_area = self
            .request
            .position
            .placement(area, width, self.height_for(width));

        let kind = self.request.kind;
        let accent = Style::default().fg(kind.color());
        let title = Line::from(vec![Span::styled(
            format!(" {} {} ", kind.indicator(), kind.label()),
            accent.add_modifier(Modifier::BOLD),
        )]);

        Clear.render(toast_area, buf);
        Paragraph::new(self.request.message.as_str())
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(accent),
            )
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .render(toast_area, buf);
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            debug!("Destroying {} toast at {}", self.request.kind, self.request.position);
            self.destroyed = true;
        }
    }
}
