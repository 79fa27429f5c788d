use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use izell_core::site;

use crate::app::App;

/// About page: company story, animated achievement counters and the list
/// of reasons to choose the company.
pub struct AboutWidget;

impl AboutWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let heading = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(theme.fg0);
        let dim = Style::default().fg(theme.muted);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  ABOUT {}", site::COMPANY_NAME.to_uppercase()),
            heading,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", site::COMPANY_TAGLINE),
            dim,
        )));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "  OUR STORY · Building Excellence Since 2008",
            heading,
        )));
        lines.push(Line::default());
        for paragraph in &site::STORY {
            lines.push(Line::from(Span::styled(format!("  {}", paragraph), body)));
            lines.push(Line::default());
        }

        // Achievement counters, climbing while the entry animation runs
        lines.push(Line::from(Span::styled("  OUR ACHIEVEMENTS", heading)));
        lines.push(Line::from(Span::styled(
            "  Numbers that speak for our commitment to excellence and quality",
            dim,
        )));
        lines.push(Line::default());
        let values = app.stat_values();
        let mut counter_spans: Vec<Span> = vec![Span::raw("  ")];
        for (stat, value) in site::STATS.iter().zip(values) {
            counter_spans.push(Span::styled(
                format!("{}{}", value, stat.suffix),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            counter_spans.push(Span::styled(format!(" {}    ", stat.label), dim));
        }
        lines.push(Line::from(counter_spans));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled("  WHY CHOOSE US", heading)));
        lines.push(Line::default());
        for reason in &site::WHY_CHOOSE_US {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(theme.success)),
                Span::styled(*reason, body),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg0))
            .wrap(Wrap { trim: false })
            .scroll((app.body_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
