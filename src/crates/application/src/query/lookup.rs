use domain::relation::{location_country, RelationSet};
use std::collections::BTreeSet;

/// 获取艺术家所在国家
///
/// 只取第一个以艺术家名称为键且列表非空的关系条目，并只看其第一项。
/// 找不到时返回空串。
pub fn country_for_artist<'a>(artist_name: &str, relations: &'a RelationSet) -> &'a str {
    for relation in &relations.index {
        if let Some(first) = relation
            .dates_locations
            .get(artist_name)
            .and_then(|locations| locations.first())
        {
            return location_country(first);
        }
    }
    ""
}

/// 从所有关系条目的地点键中提取去重并按字典序排序的国家列表
pub fn unique_countries(relations: &RelationSet) -> Vec<String> {
    relations
        .index
        .iter()
        .flat_map(|relation| relation.dates_locations.keys())
        .map(|location| location_country(location).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
