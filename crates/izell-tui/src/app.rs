use std::sync::Arc;
use std::time::{Duration, Instant};

use izell_core::site::{self, CategoryFilter, Project};
use izell_core::{AppConfig, NavChange, Navigator, Page};

use crate::theme::Theme;
use crate::transition::timing::{lerp_counter, progress};
use crate::transition::{Easing, PageSlide};

/// How long the about-page counters take to climb to their targets.
const COUNTER_DURATION: Duration = Duration::from_millis(2500);
/// How long the submission success banner stays visible.
const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Application mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Typing into the project search box
    Search,
    /// Editing the contact form
    Form,
    /// Project detail popup, holding an index into `site::PROJECTS`
    ProjectDetail(usize),
    /// Help overlay
    Help,
}

/// Fields of the contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    ProjectType,
    Preferred,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::ProjectType,
        FormField::Preferred,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name *",
            FormField::Email => "Email Address *",
            FormField::Phone => "Phone Number",
            FormField::Company => "Company Name",
            FormField::ProjectType => "Project Type",
            FormField::Preferred => "Preferred Contact",
            FormField::Message => "Project Details *",
        }
    }

    pub fn next(self) -> FormField {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + len - 1) % len]
    }
}

/// How the client prefers to be contacted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
        }
    }

    pub fn toggle(self) -> ContactMethod {
        match self {
            ContactMethod::Email => ContactMethod::Phone,
            ContactMethod::Phone => ContactMethod::Email,
        }
    }
}

/// Contact form state. Field values live here; submission is simulated by
/// the main loop.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Index into `site::PROJECT_TYPES`, none selected initially
    pub project_type: Option<usize>,
    pub preferred: ContactMethod,
    pub message: String,
    pub focused: FormField,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            project_type: None,
            preferred: ContactMethod::Email,
            message: String::new(),
            focused: FormField::Name,
        }
    }
}

impl ContactForm {
    /// The text buffer behind the focused field, when it is a text field.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Company => Some(&mut self.company),
            FormField::Message => Some(&mut self.message),
            FormField::ProjectType | FormField::Preferred => None,
        }
    }

    /// Whether the focused field takes free text (as opposed to a choice).
    pub fn focused_is_text(&self) -> bool {
        !matches!(self.focused, FormField::ProjectType | FormField::Preferred)
    }

    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
            FormField::ProjectType | FormField::Preferred => "",
        }
    }

    /// Cycle the project-type selection; `None` sits between the last and
    /// first entries so the choice can be cleared again.
    pub fn cycle_project_type(&mut self, forward: bool) {
        let len = site::PROJECT_TYPES.len();
        self.project_type = match (self.project_type, forward) {
            (None, true) => Some(0),
            (Some(i), true) if i + 1 < len => Some(i + 1),
            (Some(_), true) => None,
            (None, false) => Some(len - 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    /// Labels of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Reset every field after a successful submission.
    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Application state.
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Color theme
    pub theme: Theme,
    /// Navigation controller owning the current page
    pub navigator: Navigator,
    /// Page slide animator
    pub slide: PageSlide,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message shown in the footer
    pub status_message: Option<String>,
    /// Vertical scroll offset of the page body
    pub body_scroll: u16,

    // Home page
    /// Index of the hero slide currently shown
    pub hero_index: usize,
    /// Whether the hero slideshow auto-advances
    pub slideshow_playing: bool,
    last_hero_advance: Instant,

    // About page
    /// Counter animation start, set each time the about page is entered
    stats_started: Option<Instant>,

    // Projects page
    /// Active category tab
    pub category: CategoryFilter,
    /// Search query over the gallery
    pub search_query: String,
    /// Selection within the filtered project list
    pub selected_project: usize,

    // Contact page
    /// Contact form fields
    pub form: ContactForm,
    /// A simulated submission is in flight
    pub is_submitting: bool,
    /// When the success banner appeared
    submitted_at: Option<Instant>,
    spinner_tick: usize,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, initial_page: Page) -> Self {
        let slide = PageSlide::new(config.ui.transition.clone());
        let mut app = Self {
            config,
            theme,
            navigator: Navigator::new(initial_page),
            slide,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            body_scroll: 0,
            hero_index: 0,
            slideshow_playing: true,
            last_hero_advance: Instant::now(),
            stats_started: None,
            category: CategoryFilter::All,
            search_query: String::new(),
            selected_project: 0,
            form: ContactForm::default(),
            is_submitting: false,
            submitted_at: None,
            spinner_tick: 0,
        };
        app.on_page_entered(initial_page);
        app
    }

    /// The page currently displayed.
    pub fn current_page(&self) -> Page {
        self.navigator.current()
    }

    /// Navigate to `target`, start the slide animation and reset per-page
    /// entry state. Returns the change record.
    pub fn navigate(&mut self, target: Page) -> NavChange {
        let change = self.navigator.navigate(target);
        tracing::debug!(from = %change.from, to = %change.to, direction = ?change.direction, "navigate");
        self.slide.start(change);
        self.body_scroll = 0;
        self.mode = Mode::Normal;
        self.on_page_entered(target);
        change
    }

    fn on_page_entered(&mut self, page: Page) {
        match page {
            Page::About => {
                // Restart the count-up each visit, like the original's
                // scroll-triggered animation.
                self.stats_started = Some(Instant::now());
            }
            Page::Home => {
                self.last_hero_advance = Instant::now();
            }
            _ => {}
        }
    }

    /// Advance time-driven state. Called on every tick and animation frame.
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);

        // Hero slideshow auto-advance
        if self.current_page() == Page::Home && self.slideshow_playing {
            let interval = Duration::from_millis(self.config.ui.slideshow_interval_ms);
            if self.last_hero_advance.elapsed() >= interval {
                self.next_hero_slide();
            }
        }

        // Success banner timeout
        if let Some(at) = self.submitted_at {
            if at.elapsed() >= SUCCESS_BANNER_DURATION {
                self.submitted_at = None;
            }
        }
    }

    /// Whether anything needs a faster frame rate than the idle tick.
    pub fn needs_animation(&self) -> bool {
        self.slide.is_active() || self.stats_animating()
    }

    // --- Home ---

    pub fn next_hero_slide(&mut self) {
        self.hero_index = (self.hero_index + 1) % site::HERO_SLIDES.len();
        self.last_hero_advance = Instant::now();
    }

    pub fn prev_hero_slide(&mut self) {
        let len = site::HERO_SLIDES.len();
        self.hero_index = (self.hero_index + len - 1) % len;
        self.last_hero_advance = Instant::now();
    }

    pub fn toggle_slideshow(&mut self) {
        self.slideshow_playing = !self.slideshow_playing;
        self.last_hero_advance = Instant::now();
        let state = if self.slideshow_playing { "playing" } else { "paused" };
        self.set_status(format!("Slideshow {}", state));
    }

    // --- About ---

    fn stats_animating(&self) -> bool {
        self.stats_started
            .map(|started| started.elapsed() < COUNTER_DURATION)
            .unwrap_or(false)
    }

    /// Current animated counter values, one per `site::STATS` entry.
    pub fn stat_values(&self) -> Vec<u32> {
        let t = match self.stats_started {
            Some(started) => progress(started, COUNTER_DURATION),
            None => 1.0,
        };
        // Counters always ease out, independent of the slide easing.
        let eased = izell_core::EasingKind::Cubic.apply(t);
        site::STATS
            .iter()
            .map(|s| lerp_counter(s.target, eased))
            .collect()
    }

    // --- Projects ---

    /// Indices into `site::PROJECTS` visible under the current filter and
    /// search query.
    pub fn visible_projects(&self) -> Vec<usize> {
        site::filter_projects(self.category, &self.search_query)
    }

    /// The selected project, if the filtered list is non-empty.
    pub fn current_project(&self) -> Option<&'static Project> {
        self.current_project_index().map(|i| &site::PROJECTS[i])
    }

    /// Index into `site::PROJECTS` of the selection, for the detail popup.
    pub fn current_project_index(&self) -> Option<usize> {
        let visible = self.visible_projects();
        visible
            .get(self.selected_project.min(visible.len().saturating_sub(1)))
            .copied()
    }

    pub fn select_next_project(&mut self) {
        let len = self.visible_projects().len();
        if len > 0 && self.selected_project < len - 1 {
            self.selected_project += 1;
        }
    }

    pub fn select_prev_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
        self.selected_project = 0;
        self.set_status(format!(
            "{} ({})",
            self.category.label(),
            self.category.count()
        ));
    }

    /// Clamp the selection after the filtered list changed.
    pub fn clamp_project_selection(&mut self) {
        let len = self.visible_projects().len();
        if len == 0 {
            self.selected_project = 0;
        } else if self.selected_project >= len {
            self.selected_project = len - 1;
        }
    }

    // --- Contact ---

    /// Whether the success banner is currently visible.
    pub fn submission_succeeded(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// Mark a simulated submission as started.
    pub fn begin_submission(&mut self) {
        self.is_submitting = true;
        self.submitted_at = None;
    }

    /// Complete the simulated submission: reset the form and show the
    /// success banner.
    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
        self.submitted_at = Some(Instant::now());
        self.form.clear();
        self.set_status("Message sent successfully!");
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }

    // --- Misc ---

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if we're in a mode that accepts text input
    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Search | Mode::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use izell_core::Direction;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Theme::default(), Page::Home)
    }

    #[test]
    fn navigate_resets_scroll_and_mode() {
        let mut app = app();
        app.body_scroll = 12;
        app.mode = Mode::Help;
        let change = app.navigate(Page::Projects);
        assert_eq!(change.direction, Direction::Forward);
        assert_eq!(app.current_page(), Page::Projects);
        assert_eq!(app.body_scroll, 0);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn hero_slideshow_wraps_both_ways() {
        let mut app = app();
        assert_eq!(app.hero_index, 0);
        app.prev_hero_slide();
        assert_eq!(app.hero_index, site::HERO_SLIDES.len() - 1);
        app.next_hero_slide();
        assert_eq!(app.hero_index, 0);
    }

    #[test]
    fn project_selection_clamps_to_visible_list() {
        let mut app = app();
        app.selected_project = 99;
        app.clamp_project_selection();
        assert_eq!(app.selected_project, site::PROJECTS.len() - 1);

        app.search_query = "no such project".into();
        app.clamp_project_selection();
        assert_eq!(app.selected_project, 0);
        assert!(app.current_project().is_none());
    }

    #[test]
    fn cycling_category_resets_selection() {
        let mut app = app();
        app.select_next_project();
        app.select_next_project();
        app.cycle_category(true);
        assert_eq!(app.selected_project, 0);
        assert_eq!(app.category, CategoryFilter::Office);
    }

    #[test]
    fn selection_stops_at_list_edges() {
        let mut app = app();
        app.select_prev_project();
        assert_eq!(app.selected_project, 0);
        for _ in 0..100 {
            app.select_next_project();
        }
        assert_eq!(app.selected_project, site::PROJECTS.len() - 1);
    }

    #[test]
    fn form_requires_name_email_message() {
        let mut form = ContactForm::default();
        assert_eq!(form.missing_required(), vec!["name", "email", "message"]);
        form.name = "A. Client".into();
        form.email = "client@example.com".into();
        form.message = "Office refit, 300 sqm".into();
        assert!(form.is_valid());
        // Whitespace does not count as filled in.
        form.email = "   ".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn project_type_cycles_through_none() {
        let mut form = ContactForm::default();
        assert_eq!(form.project_type, None);
        form.cycle_project_type(true);
        assert_eq!(form.project_type, Some(0));
        form.cycle_project_type(false);
        assert_eq!(form.project_type, None);
        form.cycle_project_type(false);
        assert_eq!(form.project_type, Some(site::PROJECT_TYPES.len() - 1));
        form.cycle_project_type(true);
        assert_eq!(form.project_type, None);
    }

    #[test]
    fn form_field_focus_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn submission_lifecycle() {
        let mut app = app();
        app.form.name = "A".into();
        app.form.email = "a@b.c".into();
        app.form.message = "hello".into();
        app.begin_submission();
        assert!(app.is_submitting);
        assert!(!app.submission_succeeded());
        app.finish_submission();
        assert!(!app.is_submitting);
        assert!(app.submission_succeeded());
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn stat_values_reach_targets() {
        let mut app = app();
        // Never entered the about page: counters sit at their targets.
        app.stats_started = None;
        let values = app.stat_values();
        let targets: Vec<u32> = site::STATS.iter().map(|s| s.target).collect();
        assert_eq!(values, targets);
    }
}
