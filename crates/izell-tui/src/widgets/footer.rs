use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use izell_core::site;

use crate::app::App;

/// Footer/status line: transient status message or the company line on the
/// left, key hints on the right.
pub struct FooterWidget;

impl FooterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let left = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " © {} {} · {} · {}",
                chrono::Local::now().year(),
                site::COMPANY_NAME,
                site::COMPANY_LOCATION,
                site::COMPANY_PHONE,
            )
        };

        let hints = " 1-4:pages  tab:next  ?:help  q:quit ";
        let padding = area
            .width
            .saturating_sub(left.width() as u16 + hints.width() as u16) as usize;

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(theme.bg2)),
            Span::styled(
                hints,
                Style::default().fg(theme.muted).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
