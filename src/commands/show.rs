//! Show command - print a movie's detail sheet

use super::{Result, Services};
use crate::api::{ImageSet, MovieDetail, MovieId};
use crate::output;
use crate::sheet::DetailSheet;

/// Fetch a movie and its images and build the sheet
///
/// A failed image request only empties the images section.
///
/// # Errors
/// Returns an error if the movie record cannot be fetched.
pub fn fetch_sheet(services: &Services, id: MovieId) -> Result<DetailSheet> {
    let endpoints = &services.endpoints;
    let detail: MovieDetail = services.client.fetch_as(&endpoints.movie(id))?;

    let images = match services.client.fetch_as::<ImageSet>(&endpoints.movie_images(id)) {
        Ok(images) => Some(images),
        Err(e) => {
            tracing::warn!(id, error = %e, "images unavailable");
            None
        }
    };

    Ok(DetailSheet::build(&detail, images.as_ref(), endpoints))
}

/// Execute the show command
///
/// # Errors
/// Returns an error if the movie record cannot be fetched.
pub fn execute(services: &Services, id: MovieId) -> Result<()> {
    let sheet = fetch_sheet(services, id)?;
    println!("{}", output::sheet_text(&sheet));
    Ok(())
}
