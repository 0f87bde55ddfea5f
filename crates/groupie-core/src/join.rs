//! Join engine: cross-references the cached collections by identifier.
//!
//! Each collection is scanned linearly and the first record carrying the
//! requested identifier wins. The source data does not guarantee unique
//! identifiers, so later duplicates are ignored rather than merged or
//! rejected.

use groupie_types::{ArtistId, MergedView, RelationMap};

use crate::cache::Datasets;

/// Build the merged view for `id` from `data`.
///
/// An unknown `id` yields [`MergedView::default`]: a zero-valued artist
/// with empty locations, dates and relations, even when other collections
/// hold records under that `id`. Callers that need to tell
/// "not found" apart check [`MergedView::is_found`].
pub fn resolve(data: &Datasets, id: ArtistId) -> MergedView {
    let Some(artist) = data.artists.iter().find(|a| a.id == id) else {
        return MergedView::default();
    };

    let locations = data
        .locations
        .iter()
        .find(|l| l.id == id)
        .map(|l| l.locations.clone())
        .unwrap_or_default();

    let dates = data
        .dates
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.dates.clone())
        .unwrap_or_default();

    let relations = data
        .relations
        .iter()
        .find(|r| r.id == id)
        .map(flatten_relations)
        .unwrap_or_default();

    MergedView {
        artist: artist.clone(),
        locations,
        dates,
        relations,
    }
}

/// Flatten a relation map into `"location date"` strings.
///
/// Locations come out in the map's iteration order; each location's
/// dates keep their input order.
pub fn flatten_relations(relation: &RelationMap) -> Vec<String> {
    relation
        .dates_locations
        .iter()
        .flat_map(|(location, dates)| dates.iter().map(move |date| format!("{location} {date}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use groupie_types::{Artist, DateSet, LocationSet};

    use super::*;

    fn artist(id: u32, name: &str) -> Artist {
        Artist {
            id: ArtistId(id),
            name: name.to_owned(),
            ..Artist::default()
        }
    }

    /// Build a relation map from `(location, date)` pairs, in order.
    fn relation(id: u32, pairs: &[(&str, &str)]) -> RelationMap {
        let mut dates_locations: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (location, date) in pairs {
            dates_locations
                .entry((*location).to_owned())
                .or_default()
                .push((*date).to_owned());
        }
        RelationMap {
            id: ArtistId(id),
            dates_locations,
        }
    }

    const LONDON_PARIS: &[(&str, &str)] = &[
        ("London", "04-1994"),
        ("London", "09-1994"),
        ("Paris", "06-1994"),
    ];

    fn sample() -> Datasets {
        Datasets {
            artists: vec![artist(1, "Queen"), artist(2, "SOJA")],
            locations: vec![LocationSet {
                id: ArtistId(1),
                locations: vec!["london-uk".to_owned(), "paris-france".to_owned()],
            }],
            dates: vec![DateSet {
                id: ArtistId(1),
                dates: vec!["*04-1994".to_owned(), "06-1994".to_owned()],
            }],
            relations: vec![relation(1, LONDON_PARIS)],
        }
    }

    #[test]
    fn flattens_one_string_per_date() {
        let rel = relation(1, LONDON_PARIS);
        let flat = flatten_relations(&rel);
        assert_eq!(flat.len(), 3);
        assert!(flat.contains(&"London 04-1994".to_owned()));
        assert!(flat.contains(&"London 09-1994".to_owned()));
        assert!(flat.contains(&"Paris 06-1994".to_owned()));

        let london: Vec<&String> = flat.iter().filter(|s| s.starts_with("London")).collect();
        assert_eq!(london, vec!["London 04-1994", "London 09-1994"]);
    }

    #[test]
    fn flattening_preserves_date_order_within_location() {
        let rel = relation(
            1,
            &[("Berlin", "12-2020"), ("Berlin", "01-2019"), ("Berlin", "06-2021")],
        );
        assert_eq!(
            flatten_relations(&rel),
            vec!["Berlin 12-2020", "Berlin 01-2019", "Berlin 06-2021"]
        );
    }

    #[test]
    fn resolves_present_artist_with_all_collections() {
        let view = resolve(&sample(), ArtistId(1));
        assert!(view.is_found());
        assert_eq!(view.artist.id, ArtistId(1));
        assert_eq!(view.artist.name, "Queen");
        assert_eq!(view.locations, vec!["london-uk", "paris-france"]);
        assert_eq!(view.dates, vec!["*04-1994", "06-1994"]);
        assert_eq!(view.relations.len(), 3);
    }

    #[test]
    fn missing_cross_references_are_empty() {
        let view = resolve(&sample(), ArtistId(2));
        assert_eq!(view.artist.name, "SOJA");
        assert!(view.locations.is_empty());
        assert!(view.dates.is_empty());
        assert!(view.relations.is_empty());
    }

    #[test]
    fn absent_artist_is_zero_valued() {
        let view = resolve(&sample(), ArtistId(99));
        assert!(!view.is_found());
        assert_eq!(view, MergedView::default());
    }

    #[test]
    fn orphan_records_are_not_surfaced() {
        let mut data = sample();
        data.locations.push(LocationSet {
            id: ArtistId(7),
            locations: vec!["orphan".to_owned()],
        });
        data.dates.push(DateSet {
            id: ArtistId(7),
            dates: vec!["01-2001".to_owned()],
        });
        data.relations.push(relation(7, &[("Nowhere", "01-2001")]));

        let view = resolve(&data, ArtistId(7));
        assert_eq!(view.artist.id, ArtistId(0));
        assert!(view.locations.is_empty());
        assert!(view.dates.is_empty());
        assert!(view.relations.is_empty());
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let mut data = sample();
        data.artists.push(artist(1, "Queen (duplicate)"));
        data.locations.push(LocationSet {
            id: ArtistId(1),
            locations: vec!["tokyo-japan".to_owned()],
        });
        data.relations.push(relation(1, &[("Tokyo", "01-2000")]));

        let view = resolve(&data, ArtistId(1));
        assert_eq!(view.artist.name, "Queen");
        assert_eq!(view.locations, vec!["london-uk", "paris-france"]);
        assert!(view.relations.iter().all(|r| !r.starts_with("Tokyo")));
    }

    #[test]
    fn every_listed_artist_resolves_to_itself() {
        let data = sample();
        for artist in &data.artists {
            assert_eq!(resolve(&data, artist.id).artist.id, artist.id);
        }
    }
}
