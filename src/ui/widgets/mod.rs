//! Ratatui widgets for the movie browser
//!
//! Presentational pieces shared by the list and detail views.

mod button;
mod error_panel;
mod footer;
mod help_bar;
mod loading;
mod movie_grid;
mod search_bar;

pub use button::Button;
pub use error_panel::ErrorPanel;
pub use footer::Footer;
pub use help_bar::{HelpBar, KeyHint};
pub use loading::Loading;
pub use movie_grid::{GRID_COLUMNS, MovieGrid};
pub use search_bar::SearchBar;
