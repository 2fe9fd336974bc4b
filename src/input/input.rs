use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::SpanLine;
use crate::ui::style::Style;
use crate::ui::theme::Theme;

pub type NodeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCaps {
    pub capture_ctrl_left: bool,
    pub capture_ctrl_right: bool,
}

impl InputCaps {
    pub fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Left if modifiers.contains(KeyModifiers::CONTROL) => self.capture_ctrl_left,
            KeyCode::Right if modifiers.contains(KeyModifiers::CONTROL) => self.capture_ctrl_right,
            _ => false,
        }
    }
}

pub trait Input: Send {
    fn id(&self) -> &NodeId;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn error(&self) -> Option<&str>;
    fn set_error(&mut self, error: Option<String>);
    fn clear_error(&mut self) {
        self.set_error(None);
    }

    fn validators(&self) -> &[Validator];

    fn capabilities(&self) -> InputCaps {
        InputCaps::default()
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}

    /// Inner display width of the field, without brackets or indent.
    fn content_width(&self) -> usize;

    /// Field content, one span line per visible row, padded to `content_width`.
    fn render_lines(&self, theme: &Theme) -> Vec<SpanLine>;

    /// Cursor cell within the content rows, when focused.
    fn cursor_in_content(&self) -> Option<(usize, usize)>;
}

pub struct InputBase {
    pub id: NodeId,
    pub label: String,
    pub focused: bool,
    pub error: Option<String>,
    pub validators: Vec<Validator>,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
            error: None,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn content_style(&self, theme: &Theme) -> Style {
        if self.error.is_some() {
            theme.error
        } else if self.focused {
            theme.focused
        } else {
            theme.body
        }
    }
}

pub(crate) fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
}

pub(crate) fn byte_at(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

pub(crate) fn prev_word_boundary(value: &str, cursor: usize) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos > 0 && is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && !is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    pos
}

pub(crate) fn next_word_boundary(value: &str, cursor: usize) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = cursor.min(chars.len());
    while pos < chars.len() && is_separator(chars[pos]) {
        pos += 1;
    }
    while pos < chars.len() && !is_separator(chars[pos]) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_skip_separator_runs() {
        let value = "taro  yamada";
        assert_eq!(prev_word_boundary(value, 12), 6);
        assert_eq!(prev_word_boundary(value, 6), 0);
        assert_eq!(next_word_boundary(value, 0), 4);
        assert_eq!(next_word_boundary(value, 4), 12);
    }

    #[test]
    fn byte_at_handles_multibyte_values() {
        let value = "あbう";
        assert_eq!(byte_at(value, 0), 0);
        assert_eq!(byte_at(value, 1), 3);
        assert_eq!(byte_at(value, 2), 4);
        assert_eq!(byte_at(value, 3), 7);
        assert_eq!(byte_at(value, 9), 7);
    }
}
