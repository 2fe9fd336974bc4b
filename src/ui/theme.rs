use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub body: Style,
    pub link: Style,
    pub link_active: Style,
    pub hint: Style,
    pub error: Style,
    pub focused: Style,
    pub notice: Style,
    pub notice_failed: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_bold(),
            label: Style::new().with_color(Color::Cyan),
            body: Style::new(),
            link: Style::new().with_color(Color::White),
            link_active: Style::new().with_color(Color::Cyan).with_bold().with_underline(),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red).with_bold(),
            focused: Style::new().with_bold(),
            notice: Style::new().with_color(Color::Green),
            notice_failed: Style::new().with_color(Color::Red),
        }
    }
}
