use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use izell_core::site;

use crate::app::{App, ContactMethod, FormField, Mode};

/// Contact page: the enquiry form on the left, contact channels and
/// company details on the right.
pub struct ContactWidget;

impl ContactWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
            .split(area);

        Self::render_form(frame, columns[0], app);
        Self::render_info(frame, columns[1], app);
    }

    fn render_form(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let editing = app.mode == Mode::Form;
        let label_style = Style::default().fg(theme.muted);
        let value_style = Style::default().fg(theme.fg0);

        let block = Block::default()
            .title(" Send Us a Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing { theme.accent } else { theme.bg2 }))
            .style(Style::default().bg(theme.bg0));

        let mut lines: Vec<Line> = Vec::new();

        if app.submission_succeeded() {
            lines.push(Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(theme.success)),
                Span::styled(
                    "Message sent successfully! We'll get back to you within 24 hours.",
                    Style::default().fg(theme.success),
                ),
            ]));
            lines.push(Line::default());
        }

        for field in FormField::ALL {
            let focused = editing && app.form.focused == field;
            let marker = if focused { "▸ " } else { "  " };
            let marker_span = Span::styled(
                marker,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            );
            let label_span = Span::styled(
                format!("{:<18}", field.label()),
                if focused {
                    Style::default().fg(theme.accent)
                } else {
                    label_style
                },
            );

            let value_span = match field {
                FormField::ProjectType => {
                    let text = app
                        .form
                        .project_type
                        .map(|i| site::PROJECT_TYPES[i])
                        .unwrap_or("‹select a service›");
                    Span::styled(text, value_style)
                }
                FormField::Preferred => {
                    let text = match app.form.preferred {
                        ContactMethod::Email => "(•) Email  ( ) Phone",
                        ContactMethod::Phone => "( ) Email  (•) Phone",
                    };
                    Span::styled(text, value_style)
                }
                _ => {
                    let text = app.form.field_text(field);
                    if text.is_empty() && !focused {
                        Span::styled("…", Style::default().fg(theme.bg2))
                    } else {
                        Span::styled(text.to_string(), value_style)
                    }
                }
            };

            let mut spans = vec![marker_span, label_span, value_span];
            if focused && app.form.focused_is_text() {
                spans.push(Span::styled("█", Style::default().fg(theme.accent)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        if app.is_submitting {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", app.spinner()),
                    Style::default().fg(theme.accent),
                ),
                Span::styled("Sending Message...", Style::default().fg(theme.fg1)),
            ]));
        } else if editing {
            lines.push(Line::from(Span::styled(
                " tab:next field   ctrl-s:send   esc:done",
                Style::default().fg(theme.muted),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(" Press ", Style::default().fg(theme.muted)),
                Span::styled(
                    "enter",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to fill in the form", Style::default().fg(theme.muted)),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.body_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_info(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let heading = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(theme.muted);
        let body = Style::default().fg(theme.fg0);

        let block = Block::default()
            .title(" Get In Touch ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg0));

        let mut lines: Vec<Line> = Vec::new();
        for channel in &site::CONTACT_CHANNELS {
            lines.push(Line::from(Span::styled(channel.label, heading)));
            for detail in &channel.details {
                lines.push(Line::from(Span::styled(format!("  {}", detail), body)));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", channel.description),
                dim,
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled("Emergency Services", heading)));
        lines.push(Line::from(Span::styled(
            "  24/7 emergency support for our clients",
            dim,
        )));
        lines.push(Line::from(Span::styled("  +971 50 999 8888", body)));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} · {}", site::COMPANY_EMAIL, site::COMPANY_HOURS),
            dim,
        )));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("o", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": open website", dim),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((app.body_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
