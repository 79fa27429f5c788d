pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod popup;
pub mod projects;

pub use about::AboutWidget;
pub use contact::ContactWidget;
pub use footer::FooterWidget;
pub use home::HomeWidget;
pub use navbar::NavBarWidget;
pub use popup::PopupWidget;
pub use projects::ProjectsWidget;
