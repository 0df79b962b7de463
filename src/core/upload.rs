//! Upload submissions
//!
//! An [`UploadDraft`] is what the upload dialog collects. Validation turns it
//! into a [`ContentItem`] ready for [`crate::core::catalog::Catalog::publish`].

use crate::core::catalog::{Category, ContentItem, DEFAULT_MEDIA, DEFAULT_THUMBNAIL};
use crate::core::comments::JUST_NOW;
use crate::core::error::{Error, Result};
use crate::validators;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    /// Optional; blank falls back to [`DEFAULT_THUMBNAIL`]
    pub thumbnail_url: String,
    /// Local file picked in the dialog, if any
    pub video_file: Option<PathBuf>,
}

impl UploadDraft {
    /// Checks required fields and the thumbnail URL.
    ///
    /// # Errors
    ///
    /// - `Error::MissingRequiredField` for a blank title or description
    /// - `Error::InvalidInput` for a malformed thumbnail URL
    pub fn validate(&self) -> Result<()> {
        validators::require("title", &self.title)
            .and_then(|()| validators::require("description", &self.description))
            .map_err(|field| Error::MissingRequiredField { field })?;

        validators::validate_thumbnail_url(&self.thumbnail_url).map_err(|message| {
            Error::InvalidInput {
                field: "thumbnail",
                message,
            }
        })?;
        Ok(())
    }

    /// Validates and builds the catalog item.
    ///
    /// The id is a placeholder; the catalog assigns the real one on publish.
    pub fn into_item(self, owner: &str, now: DateTime<Utc>) -> Result<ContentItem> {
        self.validate()?;

        let thumbnail = validators::validate_thumbnail_url(&self.thumbnail_url)
            .ok()
            .flatten()
            .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string());
        let media = self
            .video_file
            .map_or_else(|| DEFAULT_MEDIA.to_string(), |p| format!("file://{}", p.display()));

        let mut item = ContentItem {
            id: 0,
            title: validators::sanitize_line(&self.title),
            owner: owner.to_string(),
            views: "0 views".to_string(),
            uploaded: JUST_NOW.to_string(),
            duration: "00:00".to_string(),
            likes: 0,
            description: validators::sanitize_body(&self.description),
            thumbnail,
            category: Category::Home,
            media: Some(media),
            published_at: Some(now),
            title_lowercase: String::new(),
            owner_lowercase: String::new(),
        };
        item.rebuild_caches();
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> UploadDraft {
        UploadDraft {
            title: title.to_string(),
            description: description.to_string(),
            ..UploadDraft::default()
        }
    }

    #[test]
    fn test_missing_title_or_description() {
        assert!(matches!(
            draft("", "desc").validate(),
            Err(Error::MissingRequiredField { field: "title" })
        ));
        assert!(matches!(
            draft("Title", "  ").validate(),
            Err(Error::MissingRequiredField {
                field: "description"
            })
        ));
    }

    #[test]
    fn test_bad_thumbnail_rejected() {
        let mut d = draft("Title", "desc");
        d.thumbnail_url = "not a url".to_string();
        assert!(matches!(
            d.validate(),
            Err(Error::InvalidInput {
                field: "thumbnail",
                ..
            })
        ));
    }

    #[test]
    fn test_defaults_applied() {
        let now = Utc::now();
        let item = draft("  My Clip ", "Something").into_item("Admin User", now).unwrap();
        assert_eq!(item.title, "My Clip");
        assert_eq!(item.owner, "Admin User");
        assert_eq!(item.views, "0 views");
        assert_eq!(item.uploaded, "Just now");
        assert_eq!(item.duration, "00:00");
        assert_eq!(item.category, Category::Home);
        assert_eq!(item.thumbnail, DEFAULT_THUMBNAIL);
        assert_eq!(item.media.as_deref(), Some(DEFAULT_MEDIA));
        assert_eq!(item.published_at, Some(now));
        assert_eq!(item.title_lowercase, "my clip");
    }

    #[test]
    fn test_local_file_and_custom_thumbnail() {
        let mut d = draft("Clip", "desc");
        d.thumbnail_url = "https://img.example/poster.png".to_string();
        d.video_file = Some(PathBuf::from("/home/me/clip.mp4"));
        let item = d.into_item("Admin User", Utc::now()).unwrap();
        assert_eq!(item.thumbnail, "https://img.example/poster.png");
        assert_eq!(item.media.as_deref(), Some("file:///home/me/clip.mp4"));
    }
}
