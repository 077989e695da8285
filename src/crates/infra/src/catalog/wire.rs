//! 上游接口的 JSON 结构

use domain::artist::Artist;
use domain::relation::{Relation, RelationSet};
use domain::value::ArtistId;
use indexmap::IndexMap;
use serde::Deserialize;

/// artists 接口数组中的单个元素，未列出的字段忽略
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistData {
    pub id: i64,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    pub first_album: String,
}

/// relation 接口响应
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct RelationData {
    pub index: Vec<RelationEntryData>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationEntryData {
    pub id: i64,
    pub dates_locations: IndexMap<String, Vec<String>>,
}

impl From<ArtistData> for Artist {
    fn from(data: ArtistData) -> Self {
        Artist {
            id: ArtistId::from(data.id),
            image: data.image,
            name: data.name,
            members: data.members,
            creation_date: data.creation_date,
            first_album: data.first_album,
        }
    }
}

impl From<RelationEntryData> for Relation {
    fn from(data: RelationEntryData) -> Self {
        Relation {
            id: ArtistId::from(data.id),
            dates_locations: data.dates_locations,
        }
    }
}

impl From<RelationData> for RelationSet {
    fn from(data: RelationData) -> Self {
        RelationSet::new(data.index.into_iter().map(Relation::from).collect())
    }
}
