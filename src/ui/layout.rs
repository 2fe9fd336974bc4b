use crate::terminal::CursorPos;
use crate::ui::frame::Frame;
use crate::ui::span::{SpanLine, Wrap};

/// A row of content destined for the screen, with the display-column offset
/// of the cursor when the row hosts the focused input.
pub type Row = (SpanLine, Option<usize>);

/// Wraps rows of spans to the terminal width. Wrapping breaks at exact
/// column multiples, so a cursor offset maps to a cell with div/mod.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layout;

impl Layout {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, rows: Vec<Row>, width: u16) -> (Frame, Option<CursorPos>) {
        let width = (width as usize).max(1);
        let mut frame = Frame::new();
        let mut cursor = None;

        for (spans, cursor_offset) in rows {
            let start_row = frame.line_count();
            place_line(&mut frame, spans, width);

            if cursor.is_none() {
                if let Some(offset) = cursor_offset {
                    cursor = Some(CursorPos {
                        col: (offset % width) as u16,
                        row: (start_row + offset / width) as u16,
                    });
                }
            }
        }

        (frame, cursor)
    }
}

fn place_line(frame: &mut Frame, spans: SpanLine, width: usize) {
    frame.new_line();
    let mut current = 0usize;

    for span in spans {
        if span.width() == 0 {
            continue;
        }

        match span.wrap() {
            Wrap::No => {
                let available = width.saturating_sub(current);
                if span.width() <= available {
                    current += span.width();
                    frame.current_line_mut().push(span);
                } else {
                    let (head, _) = span.split_at_width(available);
                    current += head.width();
                    frame.current_line_mut().push(head);
                }
            }
            Wrap::Yes => {
                let mut span = span;
                loop {
                    if current >= width {
                        frame.new_line();
                        current = 0;
                    }
                    let available = width - current;
                    if span.width() <= available {
                        current += span.width();
                        frame.current_line_mut().push(span);
                        break;
                    }
                    let (head, tail) = span.split_at_width(available);
                    current += head.width();
                    frame.current_line_mut().push(head);
                    frame.new_line();
                    current = 0;
                    match tail {
                        Some(rest) => span = rest,
                        None => break,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::span::Span;

    fn texts(frame: &Frame) -> Vec<String> {
        frame
            .lines()
            .iter()
            .map(|line| {
                line.spans()
                    .iter()
                    .map(|s| s.text().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn short_rows_stay_on_one_line() {
        let layout = Layout::new();
        let rows = vec![
            (vec![Span::new("hello")], None),
            (vec![Span::new("world")], None),
        ];
        let (frame, cursor) = layout.compose(rows, 20);
        assert_eq!(texts(&frame), vec!["hello", "world"]);
        assert!(cursor.is_none());
    }

    #[test]
    fn long_rows_wrap_at_exact_width() {
        let layout = Layout::new();
        let rows = vec![(vec![Span::new("abcdefghij")], None)];
        let (frame, _) = layout.compose(rows, 4);
        assert_eq!(texts(&frame), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn no_wrap_spans_are_truncated() {
        let layout = Layout::new();
        let rows = vec![(vec![Span::new("abcdefghij").no_wrap()], None)];
        let (frame, _) = layout.compose(rows, 4);
        assert_eq!(texts(&frame), vec!["abcd"]);
    }

    #[test]
    fn cursor_maps_through_wrapped_rows() {
        let layout = Layout::new();
        let rows = vec![
            (vec![Span::new("title")], None),
            (vec![Span::new("abcdefghij")], Some(6)),
        ];
        let (frame, cursor) = layout.compose(rows, 4);
        assert_eq!(frame.line_count(), 5);
        let cursor = cursor.unwrap();
        assert_eq!(cursor.row, 3);
        assert_eq!(cursor.col, 2);
    }

    #[test]
    fn empty_row_produces_a_blank_line() {
        let layout = Layout::new();
        let rows = vec![(vec![], None), (vec![Span::new("x")], Some(0))];
        let (frame, cursor) = layout.compose(rows, 10);
        assert_eq!(frame.line_count(), 2);
        assert_eq!(cursor.unwrap().row, 1);
    }
}
