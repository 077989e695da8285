pub mod consts;
pub mod page;
pub mod resources;

use application::query::browse_artists::BrowseArtists;
use application::query::dao::CatalogSource;
use application::query::render::PageRenderer;
use std::sync::Arc;

pub struct AppState {
    pub browse: BrowseArtists,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn CatalogSource + Send + Sync>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            browse: BrowseArtists::new(source),
            renderer,
        }
    }
}
