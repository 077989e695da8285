use crate::query::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to fetch data from the relations API: {0}")]
    RelationsUnavailable(#[source] FetchError),
    #[error("Failed to fetch data from the artists API: {0}")]
    ArtistsUnavailable(#[source] FetchError),
}
