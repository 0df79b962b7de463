//! Catalog data model
//!
//! The catalog is the full in-memory list of [`ContentItem`]s. It is seeded at
//! startup (or loaded from a JSON file) and only ever grows by publishing an
//! upload, which prepends the new item.
//!
//! # Example
//!
//! ```
//! use glasstube::core::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::seeded();
//! assert_eq!(catalog.len(), 6);
//! assert!(catalog.items().iter().any(|i| i.category == Category::Trending));
//! ```

use crate::core::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

/// Poster used when an upload does not provide its own thumbnail
pub const DEFAULT_THUMBNAIL: &str = "https://images.unsplash.com/photo-1515879218367-8466d910aaa4";

/// Media attached to uploads that were published without a local file
pub const DEFAULT_MEDIA: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

const SAMPLE_BUCKET: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

/// Category tag carried by every item.
///
/// Only `Trending` changes filtering behavior; everything else lands in `Home`.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Home,
    Trending,
}

/// A single video in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    /// Channel name of the uploader
    pub owner: String,
    /// Preformatted view count, e.g. "1.2M views"
    pub views: String,
    /// Preformatted upload age, e.g. "2 weeks ago"
    pub uploaded: String,
    /// Preformatted duration, e.g. "15:42"
    pub duration: String,
    pub likes: u64,
    pub description: String,
    pub thumbnail: String,
    #[serde(default)]
    pub category: Category,
    /// Playable media URI; items without one render a placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Set for items published during this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Cached lowercase version of `title` for search filtering
    #[serde(skip)]
    pub title_lowercase: String,
    /// Cached lowercase version of `owner` for search filtering
    #[serde(skip)]
    pub owner_lowercase: String,
}

/// What the media renderer should show for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource<'a> {
    Playable { media: &'a str, poster: &'a str },
    Placeholder { poster: &'a str },
}

impl ContentItem {
    /// Rebuilds all cached lowercase fields used by search
    pub fn rebuild_caches(&mut self) {
        self.title_lowercase = self.title.to_lowercase();
        self.owner_lowercase = self.owner.to_lowercase();
    }

    /// Case-insensitive substring match against title or owner.
    ///
    /// `needle_lowercase` must already be lowercased.
    pub fn matches_lowercase(&self, needle_lowercase: &str) -> bool {
        self.title_lowercase.contains(needle_lowercase)
            || self.owner_lowercase.contains(needle_lowercase)
    }

    pub fn media_source(&self) -> MediaSource<'_> {
        match self.media.as_deref() {
            Some(media) if !media.trim().is_empty() => MediaSource::Playable {
                media,
                poster: &self.thumbnail,
            },
            _ => MediaSource::Placeholder {
                poster: &self.thumbnail,
            },
        }
    }

    pub fn is_trending(&self) -> bool {
        self.category == Category::Trending
    }
}

/// The full in-memory list of content items, newest first
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Builds a catalog from raw items, rebuilding search caches.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if two items share an id.
    pub fn from_items(mut items: Vec<ContentItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &mut items {
            if !seen.insert(item.id) {
                return Err(Error::InvalidInput {
                    field: "id",
                    message: format!("duplicate item id {}", item.id),
                });
            }
            item.rebuild_caches();
        }
        Ok(Self { items })
    }

    /// Loads a catalog from a JSON array of items.
    pub fn load_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let items: Vec<ContentItem> = serde_json::from_str(&json)?;
        tracing::info!("Loaded {} catalog items from {}", items.len(), path.display());
        Self::from_items(items)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Next id guaranteed not to collide with any existing item
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when an item already holds `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        match self.items.iter().map(|i| i.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| Error::InvalidInput {
                field: "id",
                message: format!("no ids left after {max}"),
            }),
        }
    }

    /// Prepends a newly published item, assigning it a fresh id.
    ///
    /// Returns the assigned id. The catalog is unchanged on error.
    pub fn publish(&mut self, mut item: ContentItem) -> Result<u64> {
        item.id = self.next_id()?;
        item.rebuild_caches();
        let id = item.id;
        self.items.insert(0, item);
        Ok(id)
    }

    /// Up to `limit` items other than `selected`, in catalog order
    pub fn related(&self, selected: u64, limit: usize) -> impl Iterator<Item = &ContentItem> {
        self.items
            .iter()
            .filter(move |i| i.id != selected)
            .take(limit)
    }

    /// The built-in demo catalog
    pub fn seeded() -> Self {
        let mut items = vec![
            seed_item(
                1,
                "Advanced Programming Techniques for Modern Development",
                "Tech Academy",
                ("1.2M views", "2 weeks ago", "15:42"),
                45_000,
                Category::Trending,
                "photo-1515879218367-8466d910aaa4",
                "BigBuckBunny.mp4",
                "Learn advanced programming techniques that will take your development skills to the next level.\n\nTopics covered:\n- Design Patterns\n- Code Optimization\n- Testing Strategies\n- Performance Tuning",
            ),
            seed_item(
                2,
                "Ultimate Gaming Setup Tour 2024 - RGB Paradise",
                "Gaming Hub",
                ("856K views", "1 week ago", "12:30"),
                32_000,
                Category::Trending,
                "photo-1614179924047-e1ab49a0a0cf",
                "ElephantsDream.mp4",
                "A tour of the ultimate gaming setup for 2024, from the latest GPU to wall-to-wall RGB lighting.\n\nSetup includes:\n- RTX 4090 Graphics Card\n- 4K 144Hz Monitor\n- Custom Mechanical Keyboard\n- Professional Gaming Chair",
            ),
            seed_item(
                3,
                "Music Production Masterclass - Creating Pro Beats",
                "Studio Sessions",
                ("524K views", "3 weeks ago", "28:15"),
                18_500,
                Category::Home,
                "photo-1598488035139-bdbb2231ce04",
                "ForBiggerBlazes.mp4",
                "Produce professional-quality beats from scratch, from sound design to mixing and mastering.\n\nWhat you'll learn:\n- Sound Design Basics\n- Melody Creation\n- Drum Programming\n- Mixing Techniques",
            ),
            seed_item(
                4,
                "Breathtaking Nature Documentary - Hidden Landscapes",
                "Nature Explorer",
                ("2.1M views", "1 month ago", "42:08"),
                89_000,
                Category::Home,
                "photo-1617634667039-8e4cb277ab46",
                "ForBiggerEscapes.mp4",
                "A journey through some of the world's most stunning hidden landscapes.\n\nFeatured locations:\n- Norwegian Fjords\n- Iceland's Highlands\n- New Zealand's Alps\n- Canadian Rockies",
            ),
            seed_item(
                5,
                "Complete Fitness Workout Routine - Build Muscle Fast",
                "Fitness Pro",
                ("678K views", "2 weeks ago", "18:45"),
                28_000,
                Category::Home,
                "photo-1522845015757-50bce044e5da",
                "ForBiggerFun.mp4",
                "Follow along with a complete routine designed to build muscle and strength, with modifications for every level.\n\nWorkout includes:\n- Warm-up routine\n- Compound exercises\n- Isolation movements\n- Cool-down stretches",
            ),
            seed_item(
                6,
                "Professional Cooking Tips - Restaurant Quality at Home",
                "Chef's Kitchen",
                ("934K views", "1 week ago", "21:33"),
                41_000,
                Category::Trending,
                "photo-1514986888952-8cd320577b68",
                "ForBiggerJoyrides.mp4",
                "The techniques chefs use in restaurants, adapted for the home kitchen.\n\nTechniques covered:\n- Knife skills\n- Proper seasoning\n- Temperature control\n- Sauce making",
            ),
        ];
        for item in &mut items {
            item.rebuild_caches();
        }
        Self { items }
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_item(
    id: u64,
    title: &str,
    owner: &str,
    (views, uploaded, duration): (&str, &str, &str),
    likes: u64,
    category: Category,
    photo: &str,
    media_file: &str,
    description: &str,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        owner: owner.to_string(),
        views: views.to_string(),
        uploaded: uploaded.to_string(),
        duration: duration.to_string(),
        likes,
        description: description.to_string(),
        thumbnail: format!("https://images.unsplash.com/{photo}?fit=max&q=80&w=1080"),
        category,
        media: Some(format!("{SAMPLE_BUCKET}/{media_file}")),
        published_at: None,
        title_lowercase: String::new(),
        owner_lowercase: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_helpers::make_item;

    #[test]
    fn test_seeded_catalog_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 6);
        let trending: Vec<u64> = catalog
            .items()
            .iter()
            .filter(|i| i.is_trending())
            .map(|i| i.id)
            .collect();
        assert_eq!(trending, vec![1, 2, 6]);
        assert!(catalog.items().iter().all(|i| i.media.is_some()));
        assert_eq!(
            catalog.get(2).map(|i| i.title_lowercase.as_str()),
            Some("ultimate gaming setup tour 2024 - rgb paradise")
        );
    }

    #[test]
    fn test_publish_prepends_with_fresh_id() {
        let mut catalog = Catalog::seeded();
        let id = catalog
            .publish(make_item(0, "Fresh Upload", "Admin User", Category::Home))
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(catalog.items()[0].id, 7);
        assert_eq!(catalog.items()[0].title_lowercase, "fresh upload");
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let catalog = Catalog::from_items(vec![
            make_item(3, "a", "x", Category::Home),
            make_item(10, "b", "y", Category::Home),
        ])
        .unwrap();
        assert_eq!(catalog.next_id().unwrap(), 11);
        assert_eq!(Catalog::default().next_id().unwrap(), 1);
    }

    #[test]
    fn test_publish_after_max_id_is_refused() {
        let mut catalog = Catalog::from_items(vec![
            make_item(4, "a", "x", Category::Home),
            make_item(u64::MAX, "b", "y", Category::Home),
        ])
        .unwrap();
        assert!(matches!(
            catalog.next_id(),
            Err(Error::InvalidInput { field: "id", .. })
        ));
        let result = catalog.publish(make_item(0, "Late", "z", Category::Home));
        assert!(matches!(result, Err(Error::InvalidInput { field: "id", .. })));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, 4);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_items(vec![
            make_item(1, "a", "x", Category::Home),
            make_item(1, "b", "y", Category::Home),
        ]);
        assert!(matches!(result, Err(Error::InvalidInput { field: "id", .. })));
    }

    #[test]
    fn test_related_excludes_selected_and_limits() {
        let catalog = Catalog::seeded();
        let related: Vec<u64> = catalog.related(1, 5).map(|i| i.id).collect();
        assert_eq!(related, vec![2, 3, 4, 5, 6]);
        let related: Vec<u64> = catalog.related(4, 3).map(|i| i.id).collect();
        assert_eq!(related, vec![1, 2, 3]);
    }

    #[test]
    fn test_media_source_placeholder_when_absent() {
        let mut item = make_item(1, "a", "x", Category::Home);
        item.media = None;
        assert_eq!(
            item.media_source(),
            MediaSource::Placeholder {
                poster: &item.thumbnail
            }
        );
        item.media = Some("   ".to_string());
        assert!(matches!(item.media_source(), MediaSource::Placeholder { .. }));
        item.media = Some("file:///tmp/clip.mp4".to_string());
        assert!(matches!(
            item.media_source(),
            MediaSource::Playable { media: "file:///tmp/clip.mp4", .. }
        ));
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, Catalog::seeded().to_json_pretty().unwrap()).unwrap();

        let loaded = Catalog::load_json(&path).unwrap();
        assert_eq!(loaded.len(), 6);
        // Caches are not serialized and must be rebuilt on load
        assert_eq!(loaded.items()[0].owner_lowercase, "tech academy");
    }

    #[test]
    fn test_category_defaults_to_home_when_missing() {
        let json = r#"[{"id":1,"title":"t","owner":"o","views":"0 views","uploaded":"now",
            "duration":"00:00","likes":0,"description":"d","thumbnail":"https://x"}]"#;
        let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].category, Category::Home);
        assert!(items[0].media.is_none());
    }

    #[test]
    fn test_category_parses_lowercase() {
        assert_eq!("trending".parse::<Category>().unwrap(), Category::Trending);
        assert_eq!(Category::Home.to_string(), "home");
    }
}
