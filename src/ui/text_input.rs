//! Single-line text input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;
use crate::ui::{Component, Handled, Result};

pub enum TextInputEvent {
    Submitted(String),
    Cancelled,
}

/// A single-line editable input rendered into the area it is given.
///
/// Screens decide where it lives: the chat screen docks it at the bottom,
/// the compose dialog centers it in a popup.
pub struct TextInput {
    label: String,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: None,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Take the current value, resetting the input.
    pub fn take_value(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .chars()
                .next_back()
                .map_or(0, char::len_utf8);
            self.cursor -= prev;
            self.value.remove(self.cursor);
        }
    }

    fn delete_char_at_cursor(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        let prev = self.value[..self.cursor]
            .chars()
            .next_back()
            .map_or(0, char::len_utf8);
        self.cursor -= prev;
    }

    fn move_cursor_right(&mut self) {
        let next = self.value[self.cursor..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.cursor += next;
    }

    fn delete_word_before_cursor(&mut self) {
        let before = &self.value[..self.cursor];
        let trimmed = before.trim_end_matches(' ');
        let pos = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.value.drain(pos..self.cursor);
        self.cursor = pos;
    }

    fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl Component for TextInput {
    type Output = TextInputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => TextInputEvent::Submitted(self.value.clone()).into(),
            (KeyCode::Esc, _) => TextInputEvent::Cancelled.into(),

            (KeyCode::Backspace, KeyModifiers::ALT) => {
                self.delete_word_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Backspace, _) => {
                self.delete_char_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Delete, _) => {
                self.delete_char_at_cursor();
                Handled::Consumed
            }

            (KeyCode::Left, _) => {
                self.move_cursor_left();
                Handled::Consumed
            }
            (KeyCode::Right, _) => {
                self.move_cursor_right();
                Handled::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Handled::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Handled::Consumed
            }

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear_line();
                Handled::Consumed
            }

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                Handled::Consumed
            }

            // Consume everything else so keys do not leak to the screen.
            _ => Handled::Consumed,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (before_cursor, after_cursor) = self.value.split_at(self.cursor.min(self.value.len()));
        let cursor_char = after_cursor.chars().next().unwrap_or(' ');
        let after_cursor_rest: String = after_cursor.chars().skip(1).collect();

        let input_style = Style::default().fg(theme.text);
        let cursor_style = Style::default()
            .fg(theme.base)
            .bg(theme.text)
            .add_modifier(Modifier::BOLD);
        let placeholder_style = Style::default().fg(theme.overlay0);

        let line = if self.value.is_empty() && self.placeholder.is_some() {
            Line::from(vec![
                Span::styled(" ", cursor_style),
                Span::styled(
                    self.placeholder.clone().unwrap_or_default(),
                    placeholder_style,
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(before_cursor.to_string(), input_style),
                Span::styled(cursor_char.to_string(), cursor_style),
                Span::styled(after_cursor_rest, input_style),
            ])
        };

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border_focused()));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) {
        let _ = input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = TextInput::new("Message");
        for c in "hey".chars() {
            press(&mut input, KeyCode::Char(c));
        }
        assert_eq!(input.value(), "hey");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "he");
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = TextInput::new("Message");
        press(&mut input, KeyCode::Char('x'));
        let result = input
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        match result {
            Handled::Event(TextInputEvent::Submitted(value)) => assert_eq!(value, "x"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn take_value_resets_the_input() {
        let mut input = TextInput::new("Message");
        press(&mut input, KeyCode::Char('a'));
        assert_eq!(input.take_value(), "a");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn cursor_editing_in_the_middle() {
        let mut input = TextInput::new("Message");
        for c in "abc".chars() {
            press(&mut input, KeyCode::Char(c));
        }
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(input.value(), "abxc");
    }
}
