//! Browse command - the interactive movie browser

use super::{Result, Services};
use crate::api::MovieId;
use crate::timer::SystemClock;
use crate::ui::app::{App, Route};
use crate::ui::views::{SharedStore, ViewContext};

/// Execute the browse command
///
/// Starts on the list page, or on the detail page of `start` when given.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or driven.
pub fn execute(services: &Services, store: SharedStore, start: Option<MovieId>) -> Result<()> {
    let ctx = ViewContext {
        client: services.client.clone(),
        endpoints: services.endpoints.clone(),
        store,
        clock: SystemClock,
        debounce: services.debounce,
    };

    let route = start.map_or(Route::List, Route::Detail);
    tracing::info!(?route, "starting browser");

    App::new(ctx, route).run()?;
    Ok(())
}
