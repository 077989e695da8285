use crate::query::artist_query::ArtistQuery;
use domain::artist::Artist;
use domain::relation::{location_country, RelationSet};
use log::debug;
use std::sync::Arc;

/// 过滤执行上下文
pub struct FilterContext<'a> {
    pub query: &'a ArtistQuery,
    pub relations: &'a RelationSet,
}

/// 过滤阶段 trait，每个阶段只消费上一阶段的输出
pub trait ArtistFilter: Send + Sync {
    /// 阶段名称
    fn name(&self) -> &str;

    /// 保留条件
    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool;

    /// 是否应该执行此阶段，不执行时原样透传
    fn should_apply(&self, ctx: &FilterContext<'_>) -> bool {
        let _ = ctx;
        true
    }

    /// 执行过滤，保持剩余元素的相对顺序
    fn apply(&self, artists: Vec<Artist>, ctx: &FilterContext<'_>) -> Vec<Artist> {
        artists
            .into_iter()
            .filter(|artist| self.keep(artist, ctx))
            .collect()
    }
}

/// 过滤管道
pub struct FilterPipeline {
    filters: Vec<Arc<dyn ArtistFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// 添加阶段（追加到末尾）
    pub fn add_filter(&mut self, filter: Arc<dyn ArtistFilter>) {
        self.filters.push(filter);
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// 按顺序执行所有阶段
    pub fn execute(&self, artists: Vec<Artist>, ctx: &FilterContext<'_>) -> Vec<Artist> {
        let mut current = artists;
        for filter in &self.filters {
            if !filter.should_apply(ctx) {
                continue;
            }
            let before = current.len();
            current = filter.apply(current, ctx);
            debug!(
                "Filter '{}' kept {} of {} artists",
                filter.name(),
                current.len(),
                before
            );
        }
        current
    }

    /// 创建默认管道（包含全部内置阶段）
    pub fn with_default_filters() -> Self {
        let mut pipeline = Self::new();

        // 顺序固定
        pipeline.add_filter(Arc::new(SearchFilter));
        pipeline.add_filter(Arc::new(MemberSearchFilter));
        pipeline.add_filter(Arc::new(MemberCountFilter));
        pipeline.add_filter(Arc::new(CreationYearFilter));
        pipeline.add_filter(Arc::new(CountryFilter));

        pipeline
    }
}

// ============================================================================
// 内置阶段
// ============================================================================

/// 名称/成员搜索：名称包含搜索串，或任一成员包含搜索串
///
/// 空串是任何名称的子串，此时所有艺术家都会保留。
pub struct SearchFilter;

impl ArtistFilter for SearchFilter {
    fn name(&self) -> &str {
        "search"
    }

    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool {
        let needle = ctx.query.search.to_lowercase();
        artist.name_contains(&needle) || artist.has_member_containing(&needle)
    }
}

/// 成员搜索：至少一个成员包含成员搜索串
pub struct MemberSearchFilter;

impl ArtistFilter for MemberSearchFilter {
    fn name(&self) -> &str {
        "member_search"
    }

    fn should_apply(&self, ctx: &FilterContext<'_>) -> bool {
        !ctx.query.member_search.is_empty()
    }

    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool {
        artist.has_member_containing(&ctx.query.member_search.to_lowercase())
    }
}

/// 成员数量：等于任一选中的数量
pub struct MemberCountFilter;

impl ArtistFilter for MemberCountFilter {
    fn name(&self) -> &str {
        "member_count"
    }

    fn should_apply(&self, ctx: &FilterContext<'_>) -> bool {
        !ctx.query.num_members.is_empty()
    }

    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool {
        ctx.query.accepts_member_count(artist.member_count())
    }
}

/// 创建年份区间 [min_year, max_year]（闭区间）
pub struct CreationYearFilter;

impl ArtistFilter for CreationYearFilter {
    fn name(&self) -> &str {
        "creation_year"
    }

    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool {
        (ctx.query.min_year..=ctx.query.max_year).contains(&artist.creation_date)
    }
}

/// 国家：以艺术家名称为键的关系条目中，存在国家部分与选中国家完全相同的地点
pub struct CountryFilter;

impl ArtistFilter for CountryFilter {
    fn name(&self) -> &str {
        "country"
    }

    fn should_apply(&self, ctx: &FilterContext<'_>) -> bool {
        !ctx.query.country.is_empty()
    }

    fn keep(&self, artist: &Artist, ctx: &FilterContext<'_>) -> bool {
        let selected = ctx.query.country.as_str();
        ctx.relations
            .entries_for(&artist.name)
            .any(|locations| locations.iter().any(|l| location_country(l) == selected))
    }
}
