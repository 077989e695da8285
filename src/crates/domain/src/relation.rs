use crate::value::ArtistId;
use indexmap::IndexMap;

/// 单个艺术家的巡演关系：地点键 -> 日期列表
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub id: ArtistId,
    pub dates_locations: IndexMap<String, Vec<String>>,
}

/// 关系数据集，与上游 relation 接口的 index 一一对应
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationSet {
    pub index: Vec<Relation>,
}

impl RelationSet {
    pub fn new(index: Vec<Relation>) -> Self {
        Self { index }
    }

    /// 按顺序返回所有包含给定键的条目对应的列表
    pub fn entries_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Vec<String>> + 'a {
        self.index
            .iter()
            .filter_map(move |relation| relation.dates_locations.get(key))
    }

    /// 查找 id 对应的关系条目
    pub fn find_by_id(&self, id: ArtistId) -> Option<&Relation> {
        self.index.iter().find(|relation| relation.id == id)
    }
}

/// 取 "城市,国家" 形式字符串中最后一个逗号之后的部分（去除首尾空白）
///
/// 不含逗号时返回整个字符串去除空白后的结果。
pub fn location_country(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or(location).trim()
}
