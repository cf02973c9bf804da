//! Terminal user interface
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ App (route, event loop)      │
//! └──────────────┬───────────────┘
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌─────────────┐  ┌─────────────┐
//! │ ListView    │  │ DetailView  │
//! │ search,grid │  │ sheet       │
//! └──────┬──────┘  └──────┬──────┘
//!        └───────┬────────┘
//!                ▼
//!         widgets + theme
//! ```

pub mod app;
pub mod error;
pub mod events;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{App, Route};
pub use error::UiError;
pub use theme::Theme;
