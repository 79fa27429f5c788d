use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use izell_core::{site, AppConfig, Page};
use izell_tui::{
    app::{App, FormField, Mode},
    event::{AppEvent, EventHandler, SubmitResult},
    input::{handle_key_event, Action},
    theme::Theme,
    transition::{slide_areas, SlideFrame},
    widgets::{
        AboutWidget, ContactWidget, FooterWidget, HomeWidget, NavBarWidget, PopupWidget,
        ProjectsWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, initial_page: Page) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(site::COMPANY_NAME))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), Theme::default(), initial_page);

    // Create event handler; the animation rate kicks in while a slide or
    // counter animation is running
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.transition.animation_fps,
    );

    // Channel for the simulated form submission result
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmitResult>();

    // Checked at the END of each iteration to pick the NEXT iteration's
    // tick rate, so the first frame after a navigation is already fast
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process a completed submission (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            match result {
                SubmitResult::Done => app.finish_submission(),
            }
        }

        // Compute the slide geometry for this frame before drawing
        let slide_frame = app.slide.frame();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NavBarWidget::HEIGHT),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            NavBarWidget::render(frame, main_layout[0], &app);
            render_body(frame, main_layout[1], &app, slide_frame);
            FooterWidget::render(frame, main_layout[2], &app);

            // Overlays on top
            match &app.mode {
                Mode::ProjectDetail(index) => {
                    if let Some(project) = site::PROJECTS.get(*index) {
                        PopupWidget::render_project_detail(frame, project, &app.theme);
                    }
                }
                Mode::Help => {
                    PopupWidget::render_help(frame, &app.theme);
                }
                _ => {}
            }
        })?;

        // Handle events (faster tick while an animation is running)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &submit_tx);
                }
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {
                    app.tick();
                }
            }
        }

        needs_fast_update = app.needs_animation();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Draw the page body, splitting the area between the outgoing and
/// incoming pages while a slide is running.
fn render_body(frame: &mut Frame, area: Rect, app: &App, slide: Option<SlideFrame>) {
    match slide {
        Some(s) => {
            let (outgoing, incoming) = slide_areas(area, s.direction, s.progress);
            if let Some(outgoing) = outgoing {
                render_page(frame, outgoing, app, s.from);
            }
            if incoming.width > 0 {
                render_page(frame, incoming, app, s.to);
            }
        }
        None => render_page(frame, area, app, app.current_page()),
    }
}

fn render_page(frame: &mut Frame, area: Rect, app: &App, page: Page) {
    match page {
        Page::Home => HomeWidget::render(frame, area, app),
        Page::About => AboutWidget::render(frame, area, app),
        Page::Projects => ProjectsWidget::render(frame, area, app),
        Page::Contact => ContactWidget::render(frame, area, app),
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    submit_tx: &mpsc::UnboundedSender<SubmitResult>,
) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }

        // Navigation
        Action::GoPage(page) => {
            app.navigate(page);
        }
        Action::NextPage => {
            let target = app.current_page().next();
            app.navigate(target);
        }
        Action::PrevPage => {
            let target = app.current_page().prev();
            app.navigate(target);
        }

        // Body scrolling
        Action::ScrollDown => {
            app.body_scroll = app.body_scroll.saturating_add(1);
        }
        Action::ScrollUp => {
            app.body_scroll = app.body_scroll.saturating_sub(1);
        }

        // Home slideshow
        Action::NextSlide => app.next_hero_slide(),
        Action::PrevSlide => app.prev_hero_slide(),
        Action::ToggleSlideshow => app.toggle_slideshow(),

        // Projects
        Action::NextCategory => app.cycle_category(true),
        Action::PrevCategory => app.cycle_category(false),
        Action::StartSearch => {
            app.mode = Mode::Search;
            app.clear_status();
        }
        Action::SelectNext => app.select_next_project(),
        Action::SelectPrev => app.select_prev_project(),
        Action::OpenDetail => {
            if let Some(index) = app.current_project_index() {
                app.mode = Mode::ProjectDetail(index);
            }
        }

        // Contact form
        Action::EditForm => {
            if !app.is_submitting {
                app.mode = Mode::Form;
                app.clear_status();
            }
        }
        Action::NextField => {
            app.form.focused = app.form.focused.next();
        }
        Action::PrevField => {
            app.form.focused = app.form.focused.prev();
        }
        Action::CycleChoice(forward) => match app.form.focused {
            FormField::ProjectType => app.form.cycle_project_type(forward),
            FormField::Preferred => app.form.preferred = app.form.preferred.toggle(),
            _ => {}
        },
        Action::Submit => {
            submit_form(app, submit_tx);
        }
        Action::OpenWebsite => {
            if let Err(e) = open::that(site::COMPANY_WEBSITE) {
                app.set_status(format!("Failed to open browser: {}", e));
            } else {
                app.set_status(format!("Opening {}", site::COMPANY_WEBSITE));
            }
        }

        // Text input
        Action::InputChar(c) => match app.mode {
            Mode::Search => {
                app.search_query.push(c);
                app.clamp_project_selection();
            }
            Mode::Form => {
                if let Some(buffer) = app.form.focused_text_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        },
        Action::Backspace => match app.mode {
            Mode::Search => {
                app.search_query.pop();
                app.clamp_project_selection();
            }
            Mode::Form => {
                if let Some(buffer) = app.form.focused_text_mut() {
                    buffer.pop();
                }
            }
            _ => {}
        },

        // Overlays
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.clear_status();
        }

        Action::None => {}
    }
}

/// Validate the form and kick off the simulated submission.
fn submit_form(app: &mut App, submit_tx: &mpsc::UnboundedSender<SubmitResult>) {
    if app.is_submitting {
        app.set_status("Submission already in progress...");
        return;
    }

    let missing = app.form.missing_required();
    if !missing.is_empty() {
        app.set_status(format!("Required: {}", missing.join(", ")));
        return;
    }

    app.begin_submission();
    app.mode = Mode::Normal;
    app.set_status("Sending message...");
    tracing::info!(name = %app.form.name, "simulating contact form submission");

    // Fire-and-forget timer standing in for the network call; there is no
    // cancellation path, the result always arrives.
    let delay = Duration::from_millis(app.config.ui.submit_delay_ms);
    let tx = submit_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(SubmitResult::Done);
    });
}
