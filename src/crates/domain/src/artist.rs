use crate::value::ArtistId;
use chrono::{Datelike, NaiveDate};
use log::warn;

/// 首张专辑日期格式（日-月-年）
pub const FIRST_ALBUM_DATE_FORMAT: &str = "%d-%m-%Y";

/// 艺术家（乐队/组合），每次请求从上游拉取，拉取后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: ArtistId,
    pub image: String,
    pub name: String,
    /// 成员列表，保持上游顺序
    pub members: Vec<String>,
    /// 成立年份
    pub creation_date: i32,
    /// 首张专辑发行日期，格式 DD-MM-YYYY
    pub first_album: String,
}

impl Artist {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// 名称是否包含给定子串（不区分大小写）
    ///
    /// `needle` 需已转为小写。
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// 是否存在名称包含给定子串的成员（不区分大小写）
    ///
    /// `needle` 需已转为小写。
    pub fn has_member_containing(&self, needle: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.to_lowercase().contains(needle))
    }

    pub fn first_album_year(&self) -> i32 {
        parse_year(&self.first_album)
    }
}

/// 从 DD-MM-YYYY 格式的日期中取年份，空串或无法解析时返回 0
pub fn parse_year(date: &str) -> i32 {
    if date.is_empty() {
        return 0;
    }
    if !has_date_shape(date) {
        warn!("Failed to parse date '{}': expected DD-MM-YYYY", date);
        return 0;
    }
    match NaiveDate::parse_from_str(date, FIRST_ALBUM_DATE_FORMAT) {
        Ok(d) => d.year(),
        Err(e) => {
            warn!("Failed to parse date '{}': {}", date, e);
            0
        }
    }
}

/// 严格匹配 DD-MM-YYYY：两位日、两位月、四位年
fn has_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
