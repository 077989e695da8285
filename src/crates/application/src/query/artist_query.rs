/// 创建年份下限默认值
pub const DEFAULT_MIN_YEAR: i32 = 0;
/// 创建年份上限默认值
pub const DEFAULT_MAX_YEAR: i32 = 9999;

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    CreationDate,
    FirstAlbum,
    Country,
    /// 未识别的字段按名称排序
    #[default]
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreationDate => "creationDate",
            SortField::FirstAlbum => "firstAlbum",
            SortField::Country => "country",
            SortField::Name => "name",
        }
    }
}

impl From<&str> for SortField {
    fn from(value: &str) -> Self {
        match value {
            "creationDate" => SortField::CreationDate,
            "firstAlbum" => SortField::FirstAlbum,
            "country" => SortField::Country,
            _ => SortField::Name,
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    Desc,
    #[default]
    Unspecified,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
            SortOrder::Unspecified => "",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => SortOrder::Unspecified,
        }
    }
}

/// 一次请求的过滤与排序条件
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistQuery {
    /// 名称/成员搜索串
    pub search: String,
    /// 成员搜索串
    pub member_search: String,
    pub sort_by: SortField,
    pub order_by: SortOrder,
    pub min_year: i32,
    pub max_year: i32,
    /// 允许的成员数量，为空表示不限制
    pub num_members: Vec<usize>,
    /// 选中的国家，为空表示不限制
    pub country: String,
}

impl Default for ArtistQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            member_search: String::new(),
            sort_by: SortField::default(),
            order_by: SortOrder::default(),
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            num_members: Vec::new(),
            country: String::new(),
        }
    }
}

impl ArtistQuery {
    pub fn accepts_member_count(&self, count: usize) -> bool {
        self.num_members.contains(&count)
    }
}

/// 解析年份边界，缺失或非数字时使用默认值，超出 i32 范围时截断
pub fn parse_year_bound(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .map(|year| year.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(default)
}

/// 解析成员数量列表，跳过无法解析的项
pub fn parse_member_counts<I, S>(raw: I) -> Vec<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|value| value.as_ref().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(SortField::from("creationDate"), SortField::CreationDate);
        assert_eq!(SortField::from("firstAlbum"), SortField::FirstAlbum);
        assert_eq!(SortField::from("country"), SortField::Country);
        assert_eq!(SortField::from("members"), SortField::Name);
        assert_eq!(SortField::from(""), SortField::Name);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(SortOrder::from("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from("DESC"), SortOrder::Unspecified);
        assert_eq!(SortOrder::from(""), SortOrder::Unspecified);
    }

    #[test]
    fn test_parse_year_bound() {
        assert_eq!(parse_year_bound(Some("1980"), DEFAULT_MIN_YEAR), 1980);
        assert_eq!(parse_year_bound(Some("abc"), DEFAULT_MIN_YEAR), 0);
        assert_eq!(parse_year_bound(Some(""), DEFAULT_MAX_YEAR), 9999);
        assert_eq!(parse_year_bound(None, DEFAULT_MAX_YEAR), 9999);
    }

    #[test]
    fn test_parse_year_bound_out_of_range_is_clamped() {
        assert_eq!(parse_year_bound(Some("3000000000"), DEFAULT_MIN_YEAR), i32::MAX);
        assert_eq!(parse_year_bound(Some("-3000000000"), DEFAULT_MAX_YEAR), i32::MIN);
        assert_eq!(parse_year_bound(Some("99999999999999999999"), DEFAULT_MIN_YEAR), 0);
    }

    #[test]
    fn test_parse_member_counts_skips_malformed() {
        assert_eq!(parse_member_counts(["2", "x", "4", "-1", ""]), vec![2, 4]);
        assert!(parse_member_counts(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_default_query_is_unbounded() {
        let query = ArtistQuery::default();
        assert_eq!(query.min_year, 0);
        assert_eq!(query.max_year, 9999);
        assert!(query.num_members.is_empty());
        assert_eq!(query.sort_by, SortField::Name);
        assert_eq!(query.order_by, SortOrder::Unspecified);
    }
}
