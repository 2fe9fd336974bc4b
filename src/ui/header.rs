use crate::core::page::{NAV_LINKS, Page};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

/// The site navigation: one row of links plus a rule. Stateless; the active
/// page is just highlighted.
pub fn render(active: Page, width: usize, theme: &Theme) -> Vec<SpanLine> {
    let mut links: SpanLine = vec![Span::new(" ")];
    for (i, link) in NAV_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::new("   "));
        }
        let style = if link.page == active {
            theme.link_active
        } else {
            theme.link
        };
        links.push(Span::styled(link.label, style).no_wrap());
        links.push(Span::styled(format!(" {}", link.keys), theme.hint).no_wrap());
    }

    let rule = Span::styled("─".repeat(width.clamp(1, 200)), theme.hint).no_wrap();
    vec![links, vec![rule]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_span<'a>(lines: &'a [SpanLine], label: &str) -> &'a Span {
        lines[0]
            .iter()
            .find(|span| span.text() == label)
            .expect("link rendered")
    }

    #[test]
    fn renders_both_links() {
        let theme = Theme::default_theme();
        let lines = render(Page::Blog, 80, &theme);
        assert_eq!(lines.len(), 2);
        link_span(&lines, "Blog");
        link_span(&lines, "Contact");
    }

    #[test]
    fn active_page_is_highlighted() {
        let theme = Theme::default_theme();
        let lines = render(Page::Contact, 80, &theme);
        assert_eq!(link_span(&lines, "Contact").style(), theme.link_active);
        assert_eq!(link_span(&lines, "Blog").style(), theme.link);
    }
}
