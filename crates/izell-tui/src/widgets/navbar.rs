use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use izell_core::{site, Page};

use crate::app::App;

/// Top navigation bar: company wordmark on the left, one link per page,
/// the current page highlighted and underlined.
pub struct NavBarWidget;

impl NavBarWidget {
    /// Rows the bar occupies (links plus underline marker).
    pub const HEIGHT: u16 = 2;

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.current_page();

        let brand = format!("  {}  ", site::COMPANY_NAME.to_uppercase());
        let mut spans = vec![Span::styled(
            brand.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )];

        // Track column offsets so the underline can sit below the active link.
        let mut cursor = brand.width();
        let mut active_range = (0usize, 0usize);

        for (i, page) in Page::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, page.title());
            let style = if *page == current {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg0)
            };
            if *page == current {
                active_range = (cursor + 1, label.width().saturating_sub(2));
            }
            cursor += label.width();
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
            cursor += 2;
        }

        let links = Line::from(spans);

        let underline = Line::from(vec![
            Span::raw(" ".repeat(active_range.0)),
            Span::styled(
                "─".repeat(active_range.1),
                Style::default().fg(theme.accent),
            ),
        ]);

        let bar = Paragraph::new(vec![links, underline])
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(bar, area);
    }
}
