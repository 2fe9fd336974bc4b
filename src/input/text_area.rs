use crate::input::input::{
    Input, InputBase, InputCaps, KeyResult, NodeId, byte_at, next_word_boundary,
    prev_word_boundary,
};
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Multi-line editor. Enter inserts a newline instead of submitting, and the
/// content is displayed wrapped to the field width with the cursor tracked
/// through the wrap.
pub struct TextArea {
    base: InputBase,
    value: String,
    cursor: usize,
    width: usize,
    min_rows: usize,
}

impl TextArea {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor: 0,
            width: 60,
            min_rows: 4,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows.max(1);
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

    /// (start char index, char length) of each logical line, newlines excluded.
    fn logical_lines(&self) -> Vec<(usize, usize)> {
        let mut lines = Vec::new();
        let mut start = 0usize;
        for line in self.value.split('\n') {
            let len = line.chars().count();
            lines.push((start, len));
            start += len + 1;
        }
        lines
    }

    fn cursor_line_index(&self) -> usize {
        let lines = self.logical_lines();
        lines
            .iter()
            .position(|(start, len)| self.cursor >= *start && self.cursor <= start + len)
            .unwrap_or(lines.len().saturating_sub(1))
    }

    fn move_vertical(&mut self, delta: isize) {
        let lines = self.logical_lines();
        let current = self.cursor_line_index();
        let target = current as isize + delta;
        if target < 0 || target as usize >= lines.len() {
            return;
        }
        let col = self.cursor - lines[current].0;
        let (start, len) = lines[target as usize];
        self.cursor = start + col.min(len);
    }

    fn visual_lines(&self) -> Vec<String> {
        self.value
            .split('\n')
            .flat_map(|line| wrap_chunks(line, self.width))
            .collect()
    }

    fn cursor_visual(&self) -> (usize, usize) {
        let mut row = 0usize;
        let mut remaining = self.cursor;

        for line in self.value.split('\n') {
            let line_chars = line.chars().count();
            if remaining <= line_chars {
                let chunks = wrap_chunks(line, self.width);
                let last = chunks.len() - 1;
                let mut seen = 0usize;
                for (chunk_idx, chunk) in chunks.iter().enumerate() {
                    let chunk_chars = chunk.chars().count();
                    let in_chunk = remaining - seen;
                    if in_chunk < chunk_chars || chunk_idx == last {
                        let col = chunk
                            .chars()
                            .take(in_chunk)
                            .map(|ch| ch.width().unwrap_or(0))
                            .sum();
                        return (row + chunk_idx, col);
                    }
                    seen += chunk_chars;
                }
            }
            remaining -= line_chars + 1;
            row += wrap_chunks(line, self.width).len();
        }

        (row, 0)
    }
}

fn wrap_chunks(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    chunks.push(current);
    chunks
}

impl Input for TextArea {
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
            KeyCode::Enter => {
                self.insert_char('\n');
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
                    self.cursor = self.cursor.saturating_sub(1);
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.cursor = next_word_boundary(&self.value, self.cursor);
                } else if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Up => {
                self.move_vertical(-1);
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.move_vertical(1);
                KeyResult::Handled
            }
            KeyCode::Home => {
                let lines = self.logical_lines();
                self.cursor = lines[self.cursor_line_index()].0;
                KeyResult::Handled
            }
            KeyCode::End => {
                let lines = self.logical_lines();
                let (start, len) = lines[self.cursor_line_index()];
                self.cursor = start + len;
                KeyResult::Handled
            }
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
        let style = self.base.content_style(theme);
        let mut lines = self.visual_lines();
        while lines.len() < self.min_rows {
            lines.push(String::new());
        }
        lines
            .into_iter()
            .map(|mut text| {
                let used = text.width();
                if used < self.width {
                    text.push_str(&" ".repeat(self.width - used));
                }
                vec![Span::styled(text, style)]
            })
            .collect()
    }

    fn cursor_in_content(&self) -> Option<(usize, usize)> {
        if !self.base.focused {
            return None;
        }
        Some(self.cursor_visual())
    }
}
