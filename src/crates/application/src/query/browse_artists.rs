use crate::error::AppError;
use crate::query::artist_query::ArtistQuery;
use crate::query::dao::CatalogSource;
use crate::query::filter::{FilterContext, FilterPipeline};
use crate::query::sort::sort_artists;
use crate::query::view::ArtistsView;
use log::debug;
use std::sync::Arc;

/// 拉取 -> 过滤 -> 排序 -> 组装页面数据
pub struct BrowseArtists {
    source: Arc<dyn CatalogSource + Send + Sync>,
    pipeline: FilterPipeline,
}

impl BrowseArtists {
    pub fn new(source: Arc<dyn CatalogSource + Send + Sync>) -> Self {
        Self {
            source,
            pipeline: FilterPipeline::with_default_filters(),
        }
    }

    pub async fn handle(&self, query: &ArtistQuery) -> Result<ArtistsView, AppError> {
        // 先关系后艺术家，顺序执行
        let relations = self
            .source
            .fetch_relations()
            .await
            .map_err(AppError::RelationsUnavailable)?;
        let artists = self
            .source
            .fetch_artists()
            .await
            .map_err(AppError::ArtistsUnavailable)?;

        let total = artists.len();
        let ctx = FilterContext {
            query,
            relations: &relations,
        };
        let filtered = self.pipeline.execute(artists, &ctx);
        let sorted = sort_artists(filtered, query.sort_by, query.order_by, &relations);
        debug!(
            "Browse artists: {} of {} kept, sort_by={}, order_by={}",
            sorted.len(),
            total,
            query.sort_by.as_str(),
            query.order_by.as_str()
        );

        Ok(ArtistsView::assemble(sorted, relations, query))
    }
}
