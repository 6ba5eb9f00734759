//! Screen shown after a successful login.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::LoginToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    None,
    Logout,
    Quit,
}

/// Destination route reached after login.
pub struct LandingScreen {
    path: String,
    token: Option<LoginToken>,
}

impl LandingScreen {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            token: None,
        }
    }

    /// Returns current route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Attaches the token that opened this route.
    pub fn set_token(&mut self, token: LoginToken) {
        self.token = Some(token);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LandingAction {
        match key.code {
            KeyCode::Char('l') => LandingAction::Logout,
            KeyCode::Char('q') | KeyCode::Esc => LandingAction::Quit,
            _ => LandingAction::None,
        }
    }
}

impl Widget for &LandingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(" {} ", self.path));

        let inner = block.inner(area);
        block.render(area, buf);

        let [_, body, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let token = self
            .token
            .as_ref()
            .map_or_else(|| "-".to_string(), LoginToken::masked);

        let lines = vec![
            Line::from(Span::styled(
                "Signed in",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::raw("Route: "), Span::raw(self.path.as_str())]),
            Line::from(vec![Span::raw("Token: "), Span::raw(token)]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);

        Paragraph::new(Line::from(Span::styled(
            "l: Logout | q: Quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}
