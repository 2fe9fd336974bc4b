use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    style: Style,
    wrap: Wrap,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: Wrap::Yes,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: Wrap::Yes,
        }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = Wrap::No;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// Splits into a head of at most `cols` display columns and the rest.
    /// The head always makes progress: a character wider than `cols` is
    /// still taken rather than looping forever.
    pub fn split_at_width(self, cols: usize) -> (Span, Option<Span>) {
        if self.width() <= cols {
            return (self, None);
        }

        let mut taken = 0usize;
        let mut split_at = 0usize;
        for (idx, ch) in self.text.char_indices() {
            let w = ch.width().unwrap_or(0);
            if taken + w > cols && split_at > 0 {
                break;
            }
            taken += w;
            split_at = idx + ch.len_utf8();
            if taken >= cols {
                break;
            }
        }

        let tail_text = self.text[split_at..].to_string();
        let head = Span {
            text: self.text[..split_at].to_string(),
            style: self.style,
            wrap: self.wrap,
        };
        let tail = if tail_text.is_empty() {
            None
        } else {
            Some(Span {
                text: tail_text,
                style: self.style,
                wrap: self.wrap,
            })
        };
        (head, tail)
    }
}

pub type SpanLine = Vec<Span>;
