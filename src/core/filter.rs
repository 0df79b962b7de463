//! Catalog filtering by section and free-text query

use crate::core::catalog::ContentItem;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A named view over the catalog
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    Trending,
    WatchLater,
    Liked,
    Playlists,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Trending => "Trending",
            Self::WatchLater => "Watch Later",
            Self::Liked => "Liked Videos",
            Self::Playlists => "Playlists",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Trending => "↗",
            Self::WatchLater => "◷",
            Self::Liked => "♥",
            Self::Playlists => "≡",
        }
    }

    /// Sections only offered while someone is signed in
    pub fn requires_session(self) -> bool {
        match self {
            Self::Home | Self::Trending => false,
            Self::WatchLater | Self::Liked | Self::Playlists => true,
        }
    }

    /// Sections visible for the given session state, in sidebar order
    pub fn visible(signed_in: bool) -> impl Iterator<Item = Section> {
        Self::iter().filter(move |s| signed_in || !s.requires_session())
    }
}

/// Result of [`filter_catalog`]
///
/// Keeps the query as typed so callers can tell "nothing matched" apart from
/// "no query was given".
#[derive(Debug, Clone)]
pub struct FilteredCatalog<'a> {
    pub items: Vec<&'a ContentItem>,
    pub query: Option<&'a str>,
}

impl FilteredCatalog<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// "N results for "q"" when a query is active
    pub fn summary(&self) -> Option<String> {
        self.query
            .map(|q| format!("{} results for \"{}\"", self.items.len(), q))
    }

    pub fn empty_message(&self) -> &'static str {
        "No videos found"
    }
}

/// Produces the visible subset of `items`, preserving relative order.
///
/// `Trending` keeps only trending items; every other section keeps all of
/// them. A non-blank query further keeps items whose title or owner contains
/// it, ignoring case. Whitespace only decides whether the query is blank; a
/// non-blank query is matched as typed, surrounding spaces included.
pub fn filter_catalog<'a>(
    items: &'a [ContentItem],
    section: Section,
    query: &'a str,
) -> FilteredCatalog<'a> {
    let query = (!query.trim().is_empty()).then_some(query);
    let needle = query.map(str::to_lowercase);

    let items = items
        .iter()
        .filter(|item| section != Section::Trending || item.is_trending())
        .filter(|item| {
            needle
                .as_deref()
                .is_none_or(|needle| item.matches_lowercase(needle))
        })
        .collect();

    FilteredCatalog { items, query }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Catalog, Category};
    use crate::core::test_helpers::{arb_items, make_item};
    use proptest::prelude::*;

    fn ids(filtered: &FilteredCatalog<'_>) -> Vec<u64> {
        filtered.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_trending_keeps_only_trending_in_order() {
        let catalog = Catalog::from_items(vec![
            make_item(1, "Alpha", "One", Category::Home),
            make_item(2, "Beta", "Two", Category::Trending),
            make_item(3, "Gamma", "Three", Category::Home),
            make_item(4, "Delta", "Four", Category::Home),
            make_item(5, "Epsilon", "Five", Category::Trending),
            make_item(6, "Zeta", "Six", Category::Home),
        ])
        .unwrap();
        let filtered = filter_catalog(catalog.items(), Section::Trending, "");
        assert_eq!(ids(&filtered), vec![2, 5]);
        assert!(!filtered.has_query());
        assert_eq!(filtered.summary(), None);
    }

    #[test]
    fn test_home_gaming_query_ignores_category() {
        let catalog = Catalog::seeded();
        let filtered = filter_catalog(catalog.items(), Section::Home, "gaming");
        assert_eq!(ids(&filtered), vec![2]);

        let filtered = filter_catalog(catalog.items(), Section::Home, "GAMING");
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn test_query_matches_owner() {
        let catalog = Catalog::seeded();
        let filtered = filter_catalog(catalog.items(), Section::Home, "chef");
        assert_eq!(ids(&filtered), vec![6]);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let catalog = Catalog::seeded();
        // "Gaming Hub" has no trailing space
        let filtered = filter_catalog(catalog.items(), Section::Home, "hub ");
        assert!(filtered.is_empty());
        assert_eq!(filtered.query, Some("hub "));
        assert_eq!(filtered.summary().as_deref(), Some("0 results for \"hub \""));

        // An inner space still matches across words
        let filtered = filter_catalog(catalog.items(), Section::Home, "gaming hub");
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn test_blank_query_is_no_query() {
        let catalog = Catalog::seeded();
        let filtered = filter_catalog(catalog.items(), Section::Home, "   ");
        assert_eq!(filtered.len(), 6);
        assert!(!filtered.has_query());
    }

    #[test]
    fn test_empty_result_with_query_is_distinguishable() {
        let catalog = Catalog::seeded();
        let filtered = filter_catalog(catalog.items(), Section::Trending, "nature");
        assert!(filtered.is_empty());
        assert!(filtered.has_query());
        assert_eq!(filtered.summary().as_deref(), Some("0 results for \"nature\""));
        assert_eq!(filtered.empty_message(), "No videos found");
    }

    #[test]
    fn test_section_visibility() {
        let anon: Vec<_> = Section::visible(false).collect();
        assert_eq!(anon, vec![Section::Home, Section::Trending]);
        assert_eq!(Section::visible(true).count(), 5);
        assert_eq!(Section::WatchLater.to_string(), "watch-later");
        assert_eq!("liked".parse::<Section>().unwrap(), Section::Liked);
    }

    proptest! {
        #[test]
        fn prop_non_trending_without_query_is_identity(
            items in arb_items(),
            section in prop_oneof![
                Just(Section::Home),
                Just(Section::WatchLater),
                Just(Section::Liked),
                Just(Section::Playlists),
            ],
        ) {
            let filtered = filter_catalog(&items, section, "");
            let all: Vec<u64> = items.iter().map(|i| i.id).collect();
            prop_assert_eq!(ids(&filtered), all);
        }

        #[test]
        fn prop_trending_without_query_is_category_subset(items in arb_items()) {
            let filtered = filter_catalog(&items, Section::Trending, "");
            let expected: Vec<u64> = items
                .iter()
                .filter(|i| i.category == Category::Trending)
                .map(|i| i.id)
                .collect();
            prop_assert_eq!(ids(&filtered), expected);
        }

        #[test]
        fn prop_every_result_contains_query(
            items in arb_items(),
            query in "[a-zA-Z ]{0,4}",
            trending in any::<bool>(),
        ) {
            let section = if trending { Section::Trending } else { Section::Home };
            let needle = query.to_lowercase();
            let filtered = filter_catalog(&items, section, &query);
            for item in &filtered.items {
                prop_assert!(
                    item.title.to_lowercase().contains(&needle)
                        || item.owner.to_lowercase().contains(&needle)
                );
            }
        }

        #[test]
        fn prop_result_is_ordered_subsequence(items in arb_items(), query in "[a-z]{0,2}") {
            let filtered = filter_catalog(&items, Section::Home, &query);
            let positions: Vec<usize> = filtered
                .items
                .iter()
                .map(|f| items.iter().position(|i| i.id == f.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
