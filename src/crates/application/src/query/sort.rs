use crate::query::artist_query::{SortField, SortOrder};
use crate::query::lookup::country_for_artist;
use domain::artist::Artist;
use domain::relation::RelationSet;
use std::cmp::Ordering;

/// 稳定排序：键相同的元素保持原有顺序
pub fn sort_artists(
    mut artists: Vec<Artist>,
    sort_by: SortField,
    order_by: SortOrder,
    relations: &RelationSet,
) -> Vec<Artist> {
    artists.sort_by(|a, b| compare(a, b, sort_by, order_by, relations));
    artists
}

fn compare(
    a: &Artist,
    b: &Artist,
    sort_by: SortField,
    order_by: SortOrder,
    relations: &RelationSet,
) -> Ordering {
    if order_by == SortOrder::Unspecified {
        return a.name.cmp(&b.name);
    }
    let ordering = match sort_by {
        SortField::CreationDate => a.creation_date.cmp(&b.creation_date),
        SortField::FirstAlbum => a.first_album_year().cmp(&b.first_album_year()),
        SortField::Country => {
            country_for_artist(&a.name, relations).cmp(country_for_artist(&b.name, relations))
        }
        SortField::Name => return a.name.cmp(&b.name),
    };
    match order_by {
        SortOrder::Desc => ordering.reverse(),
        _ => ordering,
    }
}
