use actix_web::{FromRequest, HttpRequest};
use application::query::artist_query::{
    parse_member_counts, parse_year_bound, ArtistQuery, SortField, SortOrder, DEFAULT_MAX_YEAR,
    DEFAULT_MIN_YEAR,
};
use std::future::{ready, Ready};
use url::form_urlencoded;

/// GET / 的原始查询参数
///
/// - searchQuery: 名称/成员搜索
/// - memberSearch: 成员搜索
/// - sortBy: creationDate | firstAlbum | country，其他值按名称排序
/// - orderBy: asc | desc
/// - minYear / maxYear: 创建年份区间，无法解析时为 0 / 9999
/// - numMembers: 成员数量，可重复
/// - country: 国家
///
/// 同名参数重复出现时只取第一个值（numMembers 除外）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseParams {
    pub search_query: Option<String>,
    pub member_search: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub num_members: Vec<String>,
    pub country: Option<String>,
}

impl BrowseParams {
    pub fn parse(query_string: &str) -> Self {
        let mut params = BrowseParams::default();
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            let slot = match &*key {
                "searchQuery" => &mut params.search_query,
                "memberSearch" => &mut params.member_search,
                "sortBy" => &mut params.sort_by,
                "orderBy" => &mut params.order_by,
                "minYear" => &mut params.min_year,
                "maxYear" => &mut params.max_year,
                "country" => &mut params.country,
                "numMembers" => {
                    params.num_members.push(value.into_owned());
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

impl From<BrowseParams> for ArtistQuery {
    fn from(params: BrowseParams) -> Self {
        ArtistQuery {
            search: params.search_query.unwrap_or_default(),
            member_search: params.member_search.unwrap_or_default(),
            sort_by: SortField::from(params.sort_by.as_deref().unwrap_or_default()),
            order_by: SortOrder::from(params.order_by.as_deref().unwrap_or_default()),
            min_year: parse_year_bound(params.min_year.as_deref(), DEFAULT_MIN_YEAR),
            max_year: parse_year_bound(params.max_year.as_deref(), DEFAULT_MAX_YEAR),
            num_members: parse_member_counts(&params.num_members),
            country: params.country.unwrap_or_default(),
        }
    }
}

impl FromRequest for BrowseParams {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(BrowseParams::parse(req.query_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(BrowseParams::parse(""), BrowseParams::default());
        assert_eq!(ArtistQuery::from(BrowseParams::default()), ArtistQuery::default());
    }

    #[test]
    fn test_parse_all_parameters() {
        let params = BrowseParams::parse(
            "searchQuery=Que&memberSearch=fred&sortBy=creationDate&orderBy=desc\
             &minYear=1960&maxYear=1980&numMembers=2&numMembers=4&country=United+Kingdom",
        );
        let query = ArtistQuery::from(params);
        assert_eq!(query.search, "Que");
        assert_eq!(query.member_search, "fred");
        assert_eq!(query.sort_by, SortField::CreationDate);
        assert_eq!(query.order_by, SortOrder::Desc);
        assert_eq!(query.min_year, 1960);
        assert_eq!(query.max_year, 1980);
        assert_eq!(query.num_members, vec![2, 4]);
        assert_eq!(query.country, "United Kingdom");
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let query = ArtistQuery::from(BrowseParams::parse(
            "minYear=abc&maxYear=&numMembers=x&numMembers=3&numMembers=",
        ));
        assert_eq!(query.min_year, 0);
        assert_eq!(query.max_year, 9999);
        assert_eq!(query.num_members, vec![3]);
    }

    #[test]
    fn test_repeated_single_value_keeps_first() {
        let params = BrowseParams::parse("country=France&country=Germany&sortBy=country&sortBy=x");
        assert_eq!(params.country.as_deref(), Some("France"));
        assert_eq!(params.sort_by.as_deref(), Some("country"));
    }

    #[test]
    fn test_percent_decoding_and_unknown_keys() {
        let params = BrowseParams::parse("searchQuery=Bj%C3%B6rk%20%26%20co&page=2");
        assert_eq!(params.search_query.as_deref(), Some("Björk & co"));
        assert!(params.num_members.is_empty());
    }

    #[test]
    fn test_unknown_sort_values() {
        let query = ArtistQuery::from(BrowseParams::parse("sortBy=members&orderBy=up"));
        assert_eq!(query.sort_by, SortField::Name);
        assert_eq!(query.order_by, SortOrder::Unspecified);
    }
}
