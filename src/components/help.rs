// ABOUTME: Help overlay listing the demo's toast keys

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

const KEYS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Toasts:",
        &[
            ("i", "Info toast"),
            ("s", "Success toast"),
            ("w", "Warning toast"),
            ("e", "Error toast"),
            ("d", "Dismiss latest toast"),
        ],
    ),
    ("Placement:", &[("p", "Next corner")]),
    (
        "General:",
        &[
            ("?", "Toggle this help"),
            ("q/Esc", "Quit application"),
            ("Ctrl+C", "Force quit"),
        ],
    ),
];

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = scaled_center(area, 60, 80);
        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let mut items = Vec::new();
        for (index, (section, bindings)) in KEYS.iter().enumerate() {
            if index > 0 {
                items.push(ListItem::new(""));
            }
            items.push(ListItem::new(*section).style(heading));
            items.extend(
                bindings
                    .iter()
                    .map(|(key, action)| ListItem::new(format!("  {key:<11}{action}"))),
            );
        }

        let list = List::new(items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(Clear, popup_area);
        frame.render_widget(list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered rectangle covering the given percentages of `area`.
fn scaled_center(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |length: u16, percent: u16| {
        u16::try_from(u32::from(length) * u32::from(percent.min(100)) / 100).unwrap_or(length)
    };
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_center() {
        assert_eq!(
            scaled_center(Rect::new(0, 0, 120, 40), 60, 80),
            Rect::new(24, 4, 72, 32)
        );
        assert_eq!(
            scaled_center(Rect::new(10, 5, 0, 0), 60, 80),
            Rect::new(10, 5, 0, 0)
        );
    }
}
