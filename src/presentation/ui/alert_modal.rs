//! Blocking alert modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{Alert, AlertIcon};

const MAX_MODAL_WIDTH: u16 = 60;
const MIN_MODAL_WIDTH: u16 = 24;
const OK_HINT: &str = "[ OK ]";

/// Returns whether the key dismisses a modal.
#[must_use]
pub fn is_dismiss_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
    )
}

/// Centered modal rendering an [`Alert`].
pub struct AlertModal<'a> {
    alert: &'a Alert,
}

impl<'a> AlertModal<'a> {
    #[must_use]
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    const fn color(icon: AlertIcon) -> Color {
        match icon {
            AlertIcon::Error => Color::Red,
            AlertIcon::Warning => Color::Yellow,
            AlertIcon::Info => Color::Cyan,
            AlertIcon::Success => Color::Green,
        }
    }
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = &self.alert.text;
        let title = &self.alert.title;

        let max_width = MAX_MODAL_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(6)
            .max(MIN_MODAL_WIDTH)
            .min(max_width);

        let inner_width = width.saturating_sub(4).max(1);
        let content_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let text_lines = content_width.div_ceil(inner_width).max(1);

        // icon, title, blank, text, blank, hint, plus borders
        let height = text_lines.saturating_add(7).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let modal_area = area.intersection(Rect::new(x, y, width, height));
        if modal_area.area() == 0 {
            return;
        }

        let color = Self::color(self.alert.icon);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        let lines = vec![
            Line::from(Span::styled(
                self.alert.icon.glyph(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(text.as_str()),
            Line::default(),
            Line::from(Span::styled(
                OK_HINT,
                Style::default().fg(Color::Black).bg(color),
            )),
        ];

        let para = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        Clear.render(modal_area, buf);
        para.render(modal_area, buf);
    }
}
