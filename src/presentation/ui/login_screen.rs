//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::{Credentials, LoginField};
use crate::domain::form::{FieldStatus, LoginForm};
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Submitting,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
}

/// Login screen UI.
pub struct LoginScreen {
    form: LoginForm,
    email_input: TextInput,
    password_input: TextInput,
    focus: LoginField,
    state: LoginState,
    error_message: Option<String>,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        Self::with_email("")
    }

    /// Creates login screen with the email prefilled.
    #[must_use]
    pub fn with_email(email: &str) -> Self {
        let mut email_input = TextInput::new(LoginField::Email.label())
            .placeholder("nama@contoh.com");
        email_input.set_value(email);

        let password_input = TextInput::new(LoginField::Password.label())
            .password()
            .placeholder("Minimal 5 karakter");

        let focus = if email.is_empty() {
            LoginField::Email
        } else {
            LoginField::Password
        };

        let mut screen = Self {
            form: LoginForm::with_email(email),
            email_input,
            password_input,
            focus,
            state: LoginState::Input,
            error_message: None,
        };
        screen.sync_styles();
        screen
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Returns focused field.
    #[must_use]
    pub const fn focus(&self) -> LoginField {
        self.focus
    }

    /// Returns the form model.
    #[must_use]
    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Returns current field values.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.form.value()
    }

    /// Returns error shown in the status line.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Sets submitting state.
    pub fn set_submitting(&mut self) {
        self.state = LoginState::Submitting;
        self.error_message = None;
    }

    /// Sets error state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.error_message = Some(message.into());
    }

    /// Resets to input state.
    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.error_message = None;
    }

    fn input_mut(&mut self, field: LoginField) -> &mut TextInput {
        match field {
            LoginField::Email => &mut self.email_input,
            LoginField::Password => &mut self.password_input,
        }
    }

    fn input(&self, field: LoginField) -> &TextInput {
        match field {
            LoginField::Email => &self.email_input,
            LoginField::Password => &self.password_input,
        }
    }

    fn sync_styles(&mut self) {
        for field in LoginField::ALL {
            let accent = match self.form.field_status(field) {
                FieldStatus::Invalid => Some(Color::Red),
                FieldStatus::Valid => Some(Color::Green),
                FieldStatus::Untouched => None,
            };
            let focused = field == self.focus;
            let input = self.input_mut(field);
            input.set_accent(accent);
            input.set_focused(focused);
        }
    }

    fn sync_value(&mut self) {
        let field = self.focus;
        let value = self.input(field).value().to_string();
        self.form.get_mut(field).set_value(value);
    }

    fn move_focus(&mut self, to: LoginField) {
        self.form.get_mut(self.focus).mark_as_touched();
        self.focus = to;
    }

    fn submit(&mut self) -> LoginAction {
        if self.form.is_valid() {
            return LoginAction::Submit;
        }

        self.form.mark_all_as_touched();
        if let Some(first_invalid) = LoginField::ALL
            .into_iter()
            .find(|f| self.form.get(*f).is_invalid())
        {
            self.focus = first_invalid;
        }
        LoginAction::None
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Error {
            self.reset();
        }

        let action = match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(self.focus.next());
                LoginAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(self.focus.previous());
                LoginAction::None
            }
            KeyCode::Char(c) => {
                self.input_mut(self.focus).input_char(c);
                self.sync_value();
                LoginAction::None
            }
            KeyCode::Backspace => {
                self.input_mut(self.focus).backspace();
                self.sync_value();
                LoginAction::None
            }
            KeyCode::Delete => {
                self.input_mut(self.focus).delete();
                self.sync_value();
                LoginAction::None
            }
            KeyCode::Left => {
                self.input_mut(self.focus).move_left();
                LoginAction::None
            }
            KeyCode::Right => {
                self.input_mut(self.focus).move_right();
                LoginAction::None
            }
            KeyCode::Home => {
                self.input_mut(self.focus).move_start();
                LoginAction::None
            }
            KeyCode::End => {
                self.input_mut(self.focus).move_end();
                LoginAction::None
            }
            _ => LoginAction::None,
        };

        self.sync_styles();
        action
    }

    fn field_hint(&self, field: LoginField) -> Line<'static> {
        if self.form.field_status(field) == FieldStatus::Invalid {
            if let Some(error) = self.form.get(field).first_error() {
                return Line::from(Span::styled(
                    format!(" {error}"),
                    Style::default().fg(Color::Red),
                ));
            }
        }
        Line::default()
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(15),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Masuk ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<8>(inner);

        Paragraph::new("Sign in with your email and password")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.email_input).render(areas[2], buf);
        Paragraph::new(self.field_hint(LoginField::Email)).render(areas[3], buf);

        (&self.password_input).render(areas[4], buf);
        Paragraph::new(self.field_hint(LoginField::Password)).render(areas[5], buf);

        let status = match self.state {
            LoginState::Input => Line::from(vec![
                Span::styled("Enter: Login", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
            ]),
            LoginState::Submitting => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Error => {
                let msg = self.error_message.as_deref().unwrap_or("Unknown error");
                Line::from(Span::styled(
                    format!("Error: {msg}"),
                    Style::default().fg(Color::Red),
                ))
            }
        };
        Paragraph::new(status).render(areas[7], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn filled(email: &str, password: &str) -> LoginScreen {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, email);
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, password);
        screen
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::new();

        assert_eq!(screen.state(), LoginState::Input);
        assert_eq!(screen.focus(), LoginField::Email);
        assert_eq!(screen.credentials(), Credentials::new("", ""));
    }

    #[test]
    fn test_typing_updates_form() {
        let screen = filled("budi@example.com", "rahasia");

        assert_eq!(
            screen.credentials(),
            Credentials::new("budi@example.com", "rahasia")
        );
    }

    #[test]
    fn test_blur_marks_field_touched() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "budi");

        assert_eq!(
            screen.form().field_status(LoginField::Email),
            FieldStatus::Untouched
        );

        screen.handle_key(key(KeyCode::Tab));

        assert_eq!(screen.focus(), LoginField::Password);
        assert_eq!(
            screen.form().field_status(LoginField::Email),
            FieldStatus::Invalid
        );
    }

    #[test]
    fn test_short_password_invalid_after_blur() {
        let mut screen = filled("budi@example.com", "1234");
        screen.handle_key(key(KeyCode::BackTab));

        assert_eq!(
            screen.form().field_status(LoginField::Password),
            FieldStatus::Invalid
        );
        assert_eq!(
            screen.form().field_status(LoginField::Email),
            FieldStatus::Valid
        );
    }

    #[test]
    fn test_submit_invalid_form_touches_all() {
        let mut screen = LoginScreen::new();

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
        assert_eq!(
            screen.form().field_status(LoginField::Password),
            FieldStatus::Invalid
        );
        assert_eq!(screen.focus(), LoginField::Email);
    }

    #[test]
    fn test_submit_valid_form() {
        let mut screen = filled("budi@example.com", "12345");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_error_cleared_on_next_key() {
        let mut screen = filled("budi@example.com", "12345");
        screen.set_error("Network error");
        assert_eq!(screen.error_message(), Some("Network error"));

        screen.handle_key(key(KeyCode::Char('6')));

        assert_eq!(screen.state(), LoginState::Input);
        assert_eq!(screen.credentials().password(), "123456");
    }

    #[test]
    fn test_prefilled_email_focuses_password() {
        let screen = LoginScreen::with_email("budi@example.com");

        assert_eq!(screen.focus(), LoginField::Password);
        assert_eq!(screen.credentials().email(), "budi@example.com");
    }
}
