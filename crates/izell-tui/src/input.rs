use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use izell_core::Page;

use crate::app::{App, Mode};

/// Input action that can be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Jump straight to a page (number keys, nav links)
    GoPage(Page),
    /// Move to the next page in nav-bar order
    NextPage,
    /// Move to the previous page in nav-bar order
    PrevPage,
    ScrollDown,
    ScrollUp,
    // Home page
    NextSlide,
    PrevSlide,
    ToggleSlideshow,
    // Projects page
    NextCategory,
    PrevCategory,
    StartSearch,
    SelectNext,
    SelectPrev,
    OpenDetail,
    // Contact page
    EditForm,
    NextField,
    PrevField,
    CycleChoice(bool), // forward / backward within a choice field
    Submit,
    OpenWebsite,
    // Text input
    InputChar(char),
    Backspace,
    // Overlays
    Help,
    ExitMode,
    None,
}

/// Map a key event to an action, depending on the current mode and page.
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match &app.mode {
        Mode::Search => return handle_search_mode(key),
        Mode::Form => return handle_form_mode(key),
        Mode::ProjectDetail(_) => return handle_detail_mode(key),
        Mode::Help => {
            // Any key closes the overlay
            return Action::ExitMode;
        }
        Mode::Normal => {}
    }

    // Normal mode keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Page navigation
        (KeyCode::Char('1'), KeyModifiers::NONE) => Action::GoPage(Page::Home),
        (KeyCode::Char('2'), KeyModifiers::NONE) => Action::GoPage(Page::About),
        (KeyCode::Char('3'), KeyModifiers::NONE) => Action::GoPage(Page::Projects),
        (KeyCode::Char('4'), KeyModifiers::NONE) => Action::GoPage(Page::Contact),
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevPage,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,

        // Scrolling / selection
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            if app.current_page() == Page::Projects {
                Action::SelectNext
            } else {
                Action::ScrollDown
            }
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            if app.current_page() == Page::Projects {
                Action::SelectPrev
            } else {
                Action::ScrollUp
            }
        }

        // Home page slideshow
        (KeyCode::Char('n'), KeyModifiers::NONE) if app.current_page() == Page::Home => {
            Action::NextSlide
        }
        (KeyCode::Char('p'), KeyModifiers::NONE) if app.current_page() == Page::Home => {
            Action::PrevSlide
        }
        (KeyCode::Char(' '), KeyModifiers::NONE) if app.current_page() == Page::Home => {
            Action::ToggleSlideshow
        }

        // Projects page
        (KeyCode::Char('f'), KeyModifiers::NONE) if app.current_page() == Page::Projects => {
            Action::NextCategory
        }
        (KeyCode::Char('F'), KeyModifiers::SHIFT) if app.current_page() == Page::Projects => {
            Action::PrevCategory
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) if app.current_page() == Page::Projects => {
            Action::StartSearch
        }
        (KeyCode::Enter, KeyModifiers::NONE) if app.current_page() == Page::Projects => {
            Action::OpenDetail
        }

        // Contact page
        (KeyCode::Char('e'), KeyModifiers::NONE) if app.current_page() == Page::Contact => {
            Action::EditForm
        }
        (KeyCode::Enter, KeyModifiers::NONE) if app.current_page() == Page::Contact => {
            Action::EditForm
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) if app.current_page() == Page::Contact => {
            Action::OpenWebsite
        }

        // Help
        (KeyCode::Char('?'), KeyModifiers::NONE) | (KeyCode::Char('?'), KeyModifiers::SHIFT) => {
            Action::Help
        }

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Key events while typing into the project search box.
fn handle_search_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Action::ExitMode,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Key events while editing the contact form.
fn handle_form_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            Action::NextField
        }
        (KeyCode::BackTab, KeyModifiers::SHIFT) | (KeyCode::Up, KeyModifiers::NONE) => {
            Action::PrevField
        }
        (KeyCode::Left, KeyModifiers::NONE) => Action::CycleChoice(false),
        (KeyCode::Right, KeyModifiers::NONE) => Action::CycleChoice(true),
        (KeyCode::Enter, KeyModifiers::NONE) => Action::NextField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Key events inside the project detail popup.
fn handle_detail_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::ExitMode,
        // Jump to the contact page straight from a project, like the
        // modal's call-to-action button.
        KeyCode::Char('c') => Action::GoPage(Page::Contact),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use izell_core::AppConfig;
    use std::sync::Arc;

    fn app_on(page: Page) -> App {
        App::new(Arc::new(AppConfig::default()), Theme::default(), page)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_map_to_pages() {
        let app = app_on(Page::Home);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('3')), &app),
            Action::GoPage(Page::Projects)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('1')), &app),
            Action::GoPage(Page::Home)
        );
    }

    #[test]
    fn j_selects_on_projects_but_scrolls_elsewhere() {
        let projects = app_on(Page::Projects);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j')), &projects),
            Action::SelectNext
        );
        let home = app_on(Page::Home);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j')), &home),
            Action::ScrollDown
        );
    }

    #[test]
    fn slideshow_keys_only_on_home() {
        let home = app_on(Page::Home);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('n')), &home),
            Action::NextSlide
        );
        let about = app_on(Page::About);
        assert_eq!(handle_key_event(press(KeyCode::Char('n')), &about), Action::None);
    }

    #[test]
    fn form_mode_captures_text() {
        let mut app = app_on(Page::Contact);
        app.mode = Mode::Form;
        assert_eq!(
            handle_key_event(press(KeyCode::Char('x')), &app),
            Action::InputChar('x')
        );
        assert_eq!(handle_key_event(press(KeyCode::Esc), &app), Action::ExitMode);
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
                &app
            ),
            Action::Submit
        );
    }

    #[test]
    fn detail_mode_can_jump_to_contact() {
        let mut app = app_on(Page::Projects);
        app.mode = Mode::ProjectDetail(0);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('c')), &app),
            Action::GoPage(Page::Contact)
        );
        assert_eq!(handle_key_event(press(KeyCode::Esc), &app), Action::ExitMode);
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut app = app_on(Page::Home);
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(press(KeyCode::Char('z')), &app),
            Action::ExitMode
        );
    }
}
