use crate::query::FetchError;
use async_trait::async_trait;
use domain::artist::Artist;
use domain::relation::RelationSet;

/// 艺术家与巡演关系数据源
#[async_trait]
pub trait CatalogSource {
    async fn fetch_relations(&self) -> Result<RelationSet, FetchError>;
    async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError>;
}
