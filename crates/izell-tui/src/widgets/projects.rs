use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use izell_core::site::{self, CategoryFilter, ProjectStatus};

use crate::app::{App, Mode};

/// Projects page: category tabs with counts, a search box and the
/// selectable project gallery.
pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // category tabs
                Constraint::Length(1), // search line
                Constraint::Min(1),    // gallery
            ])
            .split(area);

        Self::render_tabs(frame, chunks[0], app);
        Self::render_search(frame, chunks[1], app);
        Self::render_gallery(frame, chunks[2], app);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let titles: Vec<Line> = CategoryFilter::ALL_FILTERS
            .iter()
            .map(|f| {
                Line::from(vec![
                    Span::raw(f.label()),
                    Span::styled(
                        format!(" {}", f.count()),
                        Style::default().fg(theme.muted),
                    ),
                ])
            })
            .collect();

        let selected = CategoryFilter::ALL_FILTERS
            .iter()
            .position(|&f| f == app.category)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(theme.fg1).bg(theme.bg0))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_search(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let searching = app.mode == Mode::Search;

        let mut spans = vec![Span::styled(
            " / ",
            Style::default().fg(if searching { theme.accent } else { theme.muted }),
        )];
        if app.search_query.is_empty() && !searching {
            spans.push(Span::styled(
                "search projects...",
                Style::default().fg(theme.muted),
            ));
        } else {
            spans.push(Span::styled(
                app.search_query.clone(),
                Style::default().fg(theme.fg0),
            ));
        }
        if searching {
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg0)),
            area,
        );
    }

    fn render_gallery(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let visible = app.visible_projects();

        let block = Block::default()
            .title(" Featured Projects ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg0));

        if visible.is_empty() {
            let empty = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "  No Projects Found",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "  Try adjusting your search criteria or filter options",
                    Style::default().fg(theme.muted),
                )),
            ])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|&i| {
                let project = &site::PROJECTS[i];
                let status_style = match project.status {
                    ProjectStatus::Completed => Style::default().fg(theme.success),
                    ProjectStatus::InProgress => Style::default().fg(theme.warning),
                };
                let title_line = Line::from(vec![
                    Span::styled(
                        project.title,
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  [{}]", project.category), Style::default().fg(theme.info)),
                    Span::styled(format!("  {}", project.status.label()), status_style),
                ]);
                let detail_line = Line::from(Span::styled(
                    format!(
                        "  {} · {} · {} · {}",
                        project.client, project.location, project.area, project.year
                    ),
                    Style::default().fg(theme.muted),
                ));
                ListItem::new(vec![title_line, detail_line])
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(Some(app.selected_project.min(visible.len() - 1)));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
