use crate::input::input::{
    Input, InputBase, InputCaps, KeyResult, NodeId, byte_at, next_word_boundary,
    prev_word_boundary,
};
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor: usize,
    width: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor: 0,
            width: 40,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        let at = byte_at(&self.value, self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        self.base.error = None;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = byte_at(&self.value, self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self.base.error = None;
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = byte_at(&self.value, self.cursor);
        self.value.remove(at);
        self.base.error = None;
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    fn remove_range(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }
        let start = byte_at(&self.value, from);
        let end = byte_at(&self.value, to);
        self.value.replace_range(start..end, "");
        self.cursor = from;
        self.base.error = None;
    }
}

impl Input for TextInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn error(&self) -> Option<&str> {
        self.base.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.base.error = error;
    }

    fn validators(&self) -> &[Validator] {
        &self.base.validators
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_ctrl_left: true,
            capture_ctrl_right: true,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete_at_cursor();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.cursor = prev_word_boundary(&self.value, self.cursor);
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.cursor = next_word_boundary(&self.value, self.cursor);
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn delete_word(&mut self) {
        let from = prev_word_boundary(&self.value, self.cursor);
        self.remove_range(from, self.cursor);
    }

    fn delete_word_forward(&mut self) {
        let to = next_word_boundary(&self.value, self.cursor);
        self.remove_range(self.cursor, to);
    }

    fn content_width(&self) -> usize {
        self.width
    }

    fn render_lines(&self, theme: &Theme) -> Vec<SpanLine> {
        let mut text = self.value.clone();
        let used = text.width();
        if used < self.width {
            text.push_str(&" ".repeat(self.width - used));
        }
        vec![vec![Span::styled(text, self.base.content_style(theme))]]
    }

    fn cursor_in_content(&self) -> Option<(usize, usize)> {
        if !self.base.focused {
            return None;
        }
        let col = self
            .value
            .chars()
            .take(self.cursor)
            .map(|ch| ch.width().unwrap_or(0))
            .sum();
        Some((0, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> TextInput {
        TextInput::new("name", "Name")
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_builds_the_value() {
        let mut input = input();
        type_str(&mut input, "Taro");
        assert_eq!(input.value(), "Taro");
        assert_eq!(input.cursor_in_content(), None);
        input.set_focused(true);
        assert_eq!(input.cursor_in_content(), Some((0, 4)));
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = input();
        type_str(&mut input, "abc");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "ac");
    }

    #[test]
    fn editing_clears_the_error() {
        let mut input = input();
        input.set_error(Some("This field is required".to_string()));
        input.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(input.error(), None);
    }

    #[test]
    fn moving_the_cursor_keeps_the_error() {
        let mut input = input();
        type_str(&mut input, "abc");
        input.set_error(Some("nope".to_string()));
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.error(), Some("nope"));
    }

    #[test]
    fn enter_requests_submission() {
        let mut input = input();
        let result = input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(result, KeyResult::Submit);
    }

    #[test]
    fn delete_word_removes_back_to_boundary() {
        let mut input = input();
        type_str(&mut input, "taro@example.com");
        input.delete_word();
        assert_eq!(input.value(), "taro@example.");
        input.delete_word();
        assert_eq!(input.value(), "taro@");
    }

    #[test]
    fn delete_word_forward_removes_to_next_boundary() {
        let mut input = input();
        type_str(&mut input, "one two");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.delete_word_forward();
        assert_eq!(input.value(), " two");
    }

    #[test]
    fn value_wider_than_field_is_not_padded() {
        let mut input = input().with_width(4);
        type_str(&mut input, "abcdef");
        let theme = Theme::default_theme();
        let lines = input.render_lines(&theme);
        assert_eq!(lines[0][0].text(), "abcdef");
    }
}
