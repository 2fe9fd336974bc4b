use crate::core::node::Node;
use crate::core::page::Page;
use crate::core::state::{AppState, Notice};
use crate::input::Input;
use crate::ui::header;
use crate::ui::layout::{Layout, Row};
use crate::ui::span::Span;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use crate::terminal::Terminal;
use std::io;
use unicode_width::UnicodeWidthStr;

const FIELD_INDENT: &str = "  ";

pub struct Renderer {
    layout: Layout,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            layout: Layout::new(),
        }
    }

    pub fn render(
        &self,
        state: &AppState,
        spinner: &Spinner,
        theme: &Theme,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        let width = terminal.size().width;
        let rows = build_rows(state, spinner, theme, width as usize);
        let (frame, cursor) = self.layout.compose(rows, width);
        terminal.draw(&frame, cursor)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_rows(state: &AppState, spinner: &Spinner, theme: &Theme, width: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for line in header::render(state.page, width, theme) {
        rows.push((line, None));
    }
    rows.push((vec![], None));

    if let Some(notice) = &state.notice {
        rows.extend(notice_rows(*notice, theme));
        return rows;
    }

    match state.page {
        Page::Blog => blog_rows(&mut rows, theme),
        Page::Contact => contact_rows(&mut rows, state, spinner, theme),
    }

    rows
}

fn blog_rows(rows: &mut Vec<Row>, theme: &Theme) {
    rows.push((vec![Span::styled("Blog", theme.title)], None));
    rows.push((vec![], None));
    rows.push((
        vec![Span::styled(
            "Welcome. New posts land here every so often.",
            theme.body,
        )],
        None,
    ));
    rows.push((
        vec![Span::styled(
            "Questions or feedback? The contact page is a ^T away.",
            theme.body,
        )],
        None,
    ));
}

fn contact_rows(rows: &mut Vec<Row>, state: &AppState, spinner: &Spinner, theme: &Theme) {
    rows.push((vec![Span::styled(&state.form.title, theme.title)], None));
    rows.push((vec![], None));

    let interactive = !state.submitting;

    for node in &state.form.nodes {
        match node {
            Node::Text(text) => {
                rows.push((vec![Span::styled(text, theme.body)], None));
            }
            Node::Input(input) => {
                rows.push((vec![Span::styled(input.label(), theme.label)], None));

                let cursor = if interactive {
                    input.cursor_in_content()
                } else {
                    None
                };
                for (row_index, line) in input.render_lines(theme).into_iter().enumerate() {
                    let mut spans = vec![Span::new(FIELD_INDENT), Span::new("[")];
                    spans.extend(line);
                    spans.push(Span::new("]"));
                    let cursor_col = cursor
                        .filter(|(row, _)| *row == row_index)
                        .map(|(_, col)| FIELD_INDENT.width() + 1 + col);
                    rows.push((spans, cursor_col));
                }

                if let Some(error) = input.error() {
                    rows.push((
                        vec![Span::styled(format!("  ! {}", error), theme.error)],
                        None,
                    ));
                }
                rows.push((vec![], None));
            }
        }
    }

    if state.submitting {
        rows.push((
            vec![spinner.span(), Span::styled(" Sending...", theme.hint)],
            None,
        ));
    } else if let Some(hint) = &state.form.hint {
        rows.push((vec![Span::styled(hint, theme.hint)], None));
    }
}

fn notice_rows(notice: Notice, theme: &Theme) -> Vec<Row> {
    let style = match notice {
        Notice::Sent => theme.notice,
        Notice::Failed => theme.notice_failed,
    };
    let message = notice.message();
    let dismiss = "Press Enter to continue";
    let inner = message.width().max(dismiss.width()) + 4;

    let pad = |text: &str| format!("  {}{}  ", text, " ".repeat(inner - 4 - text.width()));

    vec![
        (
            vec![Span::styled(format!("┌{}┐", "─".repeat(inner)), style).no_wrap()],
            None,
        ),
        (
            vec![
                Span::styled("│", style).no_wrap(),
                Span::styled(pad(message), style).no_wrap(),
                Span::styled("│", style).no_wrap(),
            ],
            None,
        ),
        (
            vec![
                Span::styled("│", style).no_wrap(),
                Span::new(" ".repeat(inner)).no_wrap(),
                Span::styled("│", style).no_wrap(),
            ],
            None,
        ),
        (
            vec![
                Span::styled("│", style).no_wrap(),
                Span::styled(pad(dismiss), theme.hint).no_wrap(),
                Span::styled("│", style).no_wrap(),
            ],
            None,
        ),
        (
            vec![Span::styled(format!("└{}┘", "─".repeat(inner)), style).no_wrap()],
            None,
        ),
    ]
}
