use thiserror::Error;

pub mod artist_query;
pub mod browse_artists;
pub mod dao;
pub mod filter;
pub mod lookup;
pub mod render;
pub mod sort;
pub mod view;

/// 上游接口拉取错误
#[derive(Error, Debug)]
pub enum FetchError {
    /// 无法建立连接或传输中断
    #[error("HTTP request failed: {0}")]
    Transport(String),
    /// 上游返回非 2xx 状态码
    #[error("Upstream {url} responded with status {status}")]
    UpstreamStatus { url: String, status: u16 },
    /// 响应体不是预期结构的 JSON
    #[error("JSON decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use domain::artist::Artist;
    use domain::relation::{Relation, RelationSet};
    use domain::value::ArtistId;

    pub fn artist(
        id: i64,
        name: &str,
        members: &[&str],
        creation_date: i32,
        first_album: &str,
    ) -> Artist {
        Artist {
            id: ArtistId::from(id),
            image: format!("https://example.com/{}.jpeg", id),
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            creation_date,
            first_album: first_album.to_string(),
        }
    }

    pub fn relations(entries: Vec<(i64, Vec<(&str, Vec<&str>)>)>) -> RelationSet {
        RelationSet::new(
            entries
                .into_iter()
                .map(|(id, locations)| Relation {
                    id: ArtistId::from(id),
                    dates_locations: locations
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
                        .collect(),
                })
                .collect(),
        )
    }

    pub fn names(artists: &[Artist]) -> Vec<&str> {
        artists.iter().map(|a| a.name.as_str()).collect()
    }
}
