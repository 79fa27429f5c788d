//! Page registry and navigation state.
//!
//! The site is a fixed, ordered set of pages. Navigation between them
//! carries a direction derived from the page order, which the rendering
//! layer uses to pick the slide-in side for the incoming page.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the site's logical pages, in display order.
///
/// The declaration order is significant: it defines the ordinals used to
/// classify transitions as forward or backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    /// All pages in navigation-bar order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    /// Position of this page in the fixed order.
    pub fn ordinal(self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Projects => 2,
            Page::Contact => 3,
        }
    }

    /// Display label used by the navigation bar and footer links.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    /// Stable lowercase identifier, accepted by the CLI `--page` flag.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Contact => "contact",
        }
    }

    /// Next page in order, wrapping past the end.
    pub fn next(self) -> Page {
        Page::ALL[(self.ordinal() + 1) % Page::ALL.len()]
    }

    /// Previous page in order, wrapping past the start.
    pub fn prev(self) -> Page {
        let len = Page::ALL.len();
        Page::ALL[(self.ordinal() + len - 1) % len]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "projects" => Ok(Page::Projects),
            "contact" => Ok(Page::Contact),
            other => Err(Error::UnknownPage(other.to_string())),
        }
    }
}

/// Which way a page transition moves along the page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Record of a single navigation, handed to the rendering layer so it can
/// animate the outgoing and incoming pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChange {
    pub from: Page,
    pub to: Page,
    pub direction: Direction,
}

/// Owns the current page and the direction of the most recent transition.
///
/// There is exactly one mutator (`navigate`), called synchronously from the
/// event loop, so no interior locking is needed. A navigation that arrives
/// while a slide animation is still playing simply supersedes it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    last_direction: Direction,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}

impl Navigator {
    pub fn new(initial: Page) -> Self {
        Self {
            current: initial,
            // Never observed before the first navigate; matches the value
            // the tie rule would produce for a self-navigation.
            last_direction: Direction::Backward,
        }
    }

    /// The page currently displayed.
    pub fn current(&self) -> Page {
        self.current
    }

    /// Direction recorded by the most recent `navigate`.
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Switch to `target` and classify the move.
    ///
    /// Forward when the target sits strictly later in the page order,
    /// backward otherwise. Navigating to the current page is a valid
    /// self-transition: the page is unchanged and the equal-ordinal case
    /// records backward.
    pub fn navigate(&mut self, target: Page) -> NavChange {
        let direction = if target.ordinal() > self.current.ordinal() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let change = NavChange {
            from: self.current,
            to: target,
            direction,
        };
        self.current = target;
        self.last_direction = direction;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_always_lands_on_target() {
        for &from in &Page::ALL {
            for &to in &Page::ALL {
                let mut nav = Navigator::new(from);
                let change = nav.navigate(to);
                assert_eq!(nav.current(), to);
                assert_eq!(change.from, from);
                assert_eq!(change.to, to);
            }
        }
    }

    #[test]
    fn direction_follows_ordinal_order() {
        for &from in &Page::ALL {
            for &to in &Page::ALL {
                let mut nav = Navigator::new(from);
                let change = nav.navigate(to);
                let expected = if to.ordinal() > from.ordinal() {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                assert_eq!(change.direction, expected, "{:?} -> {:?}", from, to);
                assert_eq!(nav.last_direction(), expected);
            }
        }
    }

    #[test]
    fn repeated_navigation_is_idempotent() {
        let mut nav = Navigator::new(Page::Home);
        nav.navigate(Page::Projects);
        assert_eq!(nav.current(), Page::Projects);
        let second = nav.navigate(Page::Projects);
        assert_eq!(nav.current(), Page::Projects);
        assert_eq!(second.direction, Direction::Backward);
    }

    #[test]
    fn home_to_projects_is_forward() {
        let mut nav = Navigator::new(Page::Home);
        let change = nav.navigate(Page::Projects);
        assert_eq!(change.direction, Direction::Forward);
        assert_eq!(nav.current(), Page::Projects);
    }

    #[test]
    fn projects_to_about_is_backward() {
        let mut nav = Navigator::new(Page::Projects);
        let change = nav.navigate(Page::About);
        assert_eq!(change.direction, Direction::Backward);
        assert_eq!(nav.current(), Page::About);
    }

    #[test]
    fn self_navigation_is_backward() {
        let mut nav = Navigator::new(Page::Contact);
        let change = nav.navigate(Page::Contact);
        assert_eq!(change.direction, Direction::Backward);
        assert_eq!(nav.current(), Page::Contact);

        let mut nav = Navigator::new(Page::Home);
        let change = nav.navigate(Page::Home);
        assert_eq!(change.direction, Direction::Backward);
        assert_eq!(nav.current(), Page::Home);
    }

    #[test]
    fn page_order_is_stable() {
        let ordinals: Vec<usize> = Page::ALL.iter().map(|p| p.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Contact);
        assert_eq!(Page::About.next(), Page::Projects);
        assert_eq!(Page::Projects.prev(), Page::About);
    }

    #[test]
    fn parse_slugs() {
        for &page in &Page::ALL {
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
        assert_eq!("HOME".parse::<Page>().unwrap(), Page::Home);
        assert!("services".parse::<Page>().is_err());
    }
}
