use crate::query::artist_query::ArtistQuery;
use crate::query::lookup::unique_countries;
use domain::artist::Artist;
use domain::relation::RelationSet;

/// 交给渲染器的页面数据，每次请求构建一次
#[derive(Debug, Clone)]
pub struct ArtistsView {
    /// 过滤并排序后的艺术家
    pub artists: Vec<Artist>,
    /// 原样透传的关系数据
    pub relations: RelationSet,
    /// 去重排序后的国家列表
    pub countries: Vec<String>,
    pub artist_names: Vec<String>,
    /// 所有艺术家的成员，按艺术家顺序再按成员顺序展开
    pub artist_members: Vec<String>,
    pub artist_creation: Vec<i32>,
    pub artist_search: String,
    pub member_search: String,
    /// 本次请求的完整条件，用于回填表单
    pub query: ArtistQuery,
}

impl ArtistsView {
    pub fn assemble(artists: Vec<Artist>, relations: RelationSet, query: &ArtistQuery) -> Self {
        let countries = unique_countries(&relations);
        let artist_names = artists.iter().map(|a| a.name.clone()).collect();
        let artist_members = artists
            .iter()
            .flat_map(|a| a.members.iter().cloned())
            .collect();
        let artist_creation = artists.iter().map(|a| a.creation_date).collect();

        Self {
            artists,
            relations,
            countries,
            artist_names,
            artist_members,
            artist_creation,
            artist_search: query.search.clone(),
            member_search: query.member_search.clone(),
            query: query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{artist, relations};

    #[test]
    fn test_assemble_derived_lists() {
        let artists = vec![
            artist(1, "Queen", &["Freddie", "Brian"], 1970, "13-07-1973"),
            artist(2, "Toto", &["Steve"], 1977, "15-10-1978"),
        ];
        let rels = relations(vec![
            (1, vec![("london-uk,UK", vec!["01-01-1980"])]),
            (2, vec![("la,USA", vec![]), ("leeds,UK", vec![])]),
        ]);
        let query = ArtistQuery {
            search: "o".to_string(),
            member_search: "e".to_string(),
            ..Default::default()
        };

        let view = ArtistsView::assemble(artists.clone(), rels.clone(), &query);

        assert_eq!(view.artists, artists);
        assert_eq!(view.relations, rels);
        assert_eq!(view.countries, vec!["UK", "USA"]);
        assert_eq!(view.artist_names, vec!["Queen", "Toto"]);
        assert_eq!(view.artist_members, vec!["Freddie", "Brian", "Steve"]);
        assert_eq!(view.artist_creation, vec![1970, 1977]);
        assert_eq!(view.artist_search, "o");
        assert_eq!(view.member_search, "e");
        assert_eq!(view.query, query);
    }

    #[test]
    fn test_assemble_empty() {
        let view = ArtistsView::assemble(Vec::new(), RelationSet::default(), &ArtistQuery::default());
        assert!(view.artists.is_empty());
        assert!(view.countries.is_empty());
        assert!(view.artist_members.is_empty());
        assert!(view.artist_search.is_empty());
    }
}
