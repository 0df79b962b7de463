//! Shared fixtures and proptest strategies for core tests

use crate::core::catalog::{Category, ContentItem};
use proptest::prelude::*;

/// Builds a minimal item with caches already populated
pub fn make_item(id: u64, title: &str, owner: &str, category: Category) -> ContentItem {
    let mut item = ContentItem {
        id,
        title: title.to_string(),
        owner: owner.to_string(),
        views: "0 views".to_string(),
        uploaded: "Just now".to_string(),
        duration: "00:00".to_string(),
        likes: 0,
        description: format!("About {title}"),
        thumbnail: "https://example.com/poster.jpg".to_string(),
        category,
        media: None,
        published_at: None,
        title_lowercase: String::new(),
        owner_lowercase: String::new(),
    };
    item.rebuild_caches();
    item
}

pub fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Home), Just(Category::Trending)]
}

/// Lists of up to 12 items with unique ids and short mixed-case text, so
/// random queries hit often enough to be interesting.
pub fn arb_items() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(
        ("[a-zA-Z ]{0,10}", "[a-zA-Z]{0,6}", arb_category()),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (title, owner, category))| {
                make_item(idx as u64 + 1, &title, &owner, category)
            })
            .collect()
    })
}
