use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use izell_core::site;

use crate::app::App;

/// Home page: hero slideshow on top, services, approach and a call to
/// action below, scrolling as one column.
pub struct HomeWidget;

impl HomeWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(1)])
            .split(area);

        Self::render_hero(frame, chunks[0], app);
        Self::render_sections(frame, chunks[1], app);
    }

    fn render_hero(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let slide = &site::HERO_SLIDES[app.hero_index % site::HERO_SLIDES.len()];

        // Indicator dots, filled for the current slide
        let mut dots: Vec<Span> = Vec::new();
        for i in 0..site::HERO_SLIDES.len() {
            let style = if i == app.hero_index {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.muted)
            };
            dots.push(Span::styled(if i == app.hero_index { "●" } else { "○" }, style));
            dots.push(Span::raw(" "));
        }
        dots.push(Span::styled(
            if app.slideshow_playing { "  ▸ playing" } else { "  ⏸ paused" },
            Style::default().fg(theme.muted),
        ));

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                slide.title,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                slide.subtitle,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(slide.description, Style::default().fg(theme.fg1)))
                .alignment(Alignment::Center),
            Line::default(),
            Line::from(dots).alignment(Alignment::Center),
        ];

        let hero = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.bg2)),
            )
            .style(Style::default().bg(theme.bg0))
            .wrap(Wrap { trim: true });
        frame.render_widget(hero, area);
    }

    fn render_sections(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let heading = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(theme.fg0);
        let dim = Style::default().fg(theme.muted);

        let mut lines: Vec<Line> = Vec::new();

        // Services
        lines.push(Line::from(Span::styled("  OUR SERVICES", heading)));
        lines.push(Line::from(Span::styled(
            "  Comprehensive interior design and fit-out solutions tailored to \
             transform your vision into reality",
            dim,
        )));
        lines.push(Line::default());
        for service in &site::SERVICES {
            lines.push(Line::from(vec![
                Span::styled("  ▪ ", Style::default().fg(theme.accent)),
                Span::styled(service.title, body.add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", service.description),
                Style::default().fg(theme.fg1),
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", service.features.join(" · ")),
                dim,
            )));
            lines.push(Line::default());
        }

        // Approach
        lines.push(Line::from(Span::styled("  OUR APPROACH", heading)));
        lines.push(Line::default());
        for step in &site::APPROACH {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", step.title), body.add_modifier(Modifier::BOLD)),
                Span::styled(step.description, dim),
            ]));
        }
        lines.push(Line::default());

        // Why choose us
        lines.push(Line::from(Span::styled(
            "  YOUR TRUSTED PARTNER IN INTERIOR SOLUTIONS",
            heading,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", site::COMPANY_TAGLINE),
            dim,
        )));
        lines.push(Line::default());

        // Call to action
        lines.push(Line::from(vec![
            Span::styled("  Ready to get started? Press ", body),
            Span::styled("4", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" to contact us for a free consultation.", body),
        ]));

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg0))
            .wrap(Wrap { trim: false })
            .scroll((app.body_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
