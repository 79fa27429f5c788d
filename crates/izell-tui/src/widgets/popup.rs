use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use izell_core::site::Project;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Project detail popup, the terminal rendition of the gallery modal.
    pub fn render_project_detail(frame: &mut Frame, project: &Project, theme: &Theme) {
        let area = frame.area();
        let popup_area = centered_rect(
            64.min(area.width.saturating_sub(4)),
            16.min(area.height.saturating_sub(2)),
            area,
        );

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", truncate_str(project.title, 50)))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let label = Style::default().fg(theme.muted);
        let value = Style::default().fg(theme.fg0);

        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("  Client    ", label),
                Span::styled(project.client, value),
            ]),
            Line::from(vec![
                Span::styled("  Location  ", label),
                Span::styled(project.location, value),
            ]),
            Line::from(vec![
                Span::styled("  Area      ", label),
                Span::styled(project.area, value),
            ]),
            Line::from(vec![
                Span::styled("  Year      ", label),
                Span::styled(project.year, value),
            ]),
            Line::from(vec![
                Span::styled("  Status    ", label),
                Span::styled(
                    project.status.label(),
                    Style::default().fg(match project.status {
                        izell_core::site::ProjectStatus::Completed => theme.success,
                        izell_core::site::ProjectStatus::InProgress => theme.warning,
                    }),
                ),
            ]),
            Line::default(),
        ];
        lines.push(Line::from(Span::styled(
            format!("  {}", project.description),
            value,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", project.credit),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled("[c]", Style::default().fg(theme.accent)),
                Span::styled(" contact us   ", Style::default().fg(theme.muted)),
                Span::styled("[esc]", Style::default().fg(theme.accent)),
                Span::styled(" close", Style::default().fg(theme.muted)),
            ])
            .alignment(Alignment::Center),
        );

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }

    /// Key reference overlay.
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let popup_area = centered_rect(
            52.min(area.width.saturating_sub(4)),
            18.min(area.height.saturating_sub(2)),
            area,
        );

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let key = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let desc = Style::default().fg(theme.fg0);
        let entry = |k: &'static str, d: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<12}", k), key),
                Span::styled(d, desc),
            ])
        };

        let lines = vec![
            Line::default(),
            entry("1-4", "go to page"),
            entry("tab / h l", "next / previous page"),
            entry("j k", "scroll, or move project selection"),
            Line::default(),
            entry("n p space", "hero: next / previous / play-pause"),
            entry("f F", "projects: cycle category filter"),
            entry("/", "projects: search"),
            entry("enter", "projects: details · contact: edit form"),
            Line::default(),
            entry("ctrl-s", "form: submit"),
            entry("o", "contact: open website"),
            entry("esc", "close / leave input"),
            entry("q", "quit"),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 20, outer);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_str("short", 30), "short");
        assert_eq!(truncate_str("abcdefghij", 8), "abcde...");
    }
}
