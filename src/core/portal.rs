//! Top-level controller for all domain state
//!
//! [`Portal`] owns the catalog, the credential directory, the active session,
//! the viewer's reactions and the comment threads. Every operation that can
//! fail reports through a [`NotificationSink`] and returns a `Result`, so the
//! GUI, the CLI and tests drive exactly the same logic.

use crate::core::catalog::{Catalog, ContentItem};
use crate::core::comments::{CommentBook, CommentThread};
use crate::core::directory::{CredentialDirectory, MockDirectory};
use crate::core::error::{Error, Result};
use crate::core::filter::{FilteredCatalog, Section, filter_catalog};
use crate::core::notify::NotificationSink;
use crate::core::reaction::{ReactionBoard, ReactionKind, ReactionState};
use crate::core::session::UserSession;
use crate::core::upload::UploadDraft;
use crate::validators;

#[derive(Debug, Clone)]
pub struct Portal<D = MockDirectory> {
    catalog: Catalog,
    directory: D,
    session: Option<UserSession>,
    reactions: ReactionBoard,
    comments: CommentBook,
    selected: Option<u64>,
}

/// Items shown beside the open video
pub const RELATED_LIMIT: usize = 5;

impl Portal<MockDirectory> {
    /// Demo catalog plus the demo accounts
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), MockDirectory::seeded())
    }
}

impl<D: CredentialDirectory> Portal<D> {
    pub fn new(catalog: Catalog, directory: D) -> Self {
        Self {
            catalog,
            directory,
            session: None,
            reactions: ReactionBoard::default(),
            comments: CommentBook::new(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn can_upload(&self) -> bool {
        self.session.as_ref().is_some_and(UserSession::can_upload)
    }

    pub fn filtered<'a>(&'a self, section: Section, query: &'a str) -> FilteredCatalog<'a> {
        filter_catalog(self.catalog.items(), section, query)
    }

    // ─── Selection ────────────────────────────────────────────────────────

    /// Opens the detail view for `item_id`; unknown ids clear the selection
    pub fn select(&mut self, item_id: u64) -> Option<&ContentItem> {
        self.selected = self.catalog.get(item_id).map(|item| item.id);
        self.selected_item()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// Related items for the open video, empty when nothing is selected
    pub fn related(&self) -> Vec<&ContentItem> {
        self.selected
            .map(|id| self.catalog.related(id, RELATED_LIMIT).collect())
            .unwrap_or_default()
    }

    // ─── Session ───────────────────────────────────────────────────────────

    /// Opens a session for a directory match.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCredentials` on a miss; the current session (if
    /// any) is left untouched.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        sink: &mut impl NotificationSink,
    ) -> Result<&UserSession> {
        let Some(entry) = self.directory.lookup(email, password) else {
            tracing::info!("Login rejected for {}", email.trim());
            let err = Error::InvalidCredentials;
            sink.error(err.user_message());
            return Err(err);
        };

        tracing::info!("Signed in as {} ({})", entry.email, entry.role);
        sink.success(format!("Welcome back, {}!", entry.name));
        Ok(self.start_session(entry.into()))
    }

    /// Registers a regular user and signs them in.
    ///
    /// # Errors
    ///
    /// - `Error::MissingRequiredField` if any field is blank
    /// - `Error::InvalidInput` for a malformed email
    /// - `Error::EmailTaken` if the email is already registered
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        sink: &mut impl NotificationSink,
    ) -> Result<&UserSession> {
        match self.try_register(name, email, password) {
            Ok(session) => {
                tracing::info!("Registered {}", session.email);
                sink.success(format!("Account created! Welcome, {}!", session.name));
                Ok(self.start_session(session))
            }
            Err(err) => {
                sink.error(err.user_message());
                Err(err)
            }
        }
    }

    fn try_register(&mut self, name: &str, email: &str, password: &str) -> Result<UserSession> {
        validators::require("name", name)
            .and_then(|()| validators::require("email", email))
            .and_then(|()| validators::require("password", password))
            .map_err(|field| Error::MissingRequiredField { field })?;

        let email = validators::validate_email(email).map_err(|message| Error::InvalidInput {
            field: "email",
            message,
        })?;
        let name = validators::sanitize_line(name);

        Ok(self.directory.register(&name, &email, password)?.into())
    }

    fn start_session(&mut self, session: UserSession) -> &UserSession {
        // Reactions belong to a viewer; a new viewer starts clean
        self.reactions.clear();
        self.session.insert(session)
    }

    pub fn logout(&mut self, sink: &mut impl NotificationSink) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.email);
            self.reactions.clear();
            self.selected = None;
            sink.success("Logged out successfully");
        }
    }

    // ─── Reactions ─────────────────────────────────────────────────────────

    pub fn reaction(&self, item_id: u64) -> ReactionState {
        self.reactions.item(item_id)
    }

    pub fn reactions(&self) -> &ReactionBoard {
        &self.reactions
    }

    /// Applies a like/dislike. Returns `None` (and changes nothing) without
    /// a session or for an unknown item.
    pub fn react(&mut self, item_id: u64, kind: ReactionKind) -> Option<ReactionState> {
        if self.session.is_none() || self.catalog.get(item_id).is_none() {
            return None;
        }
        Some(self.reactions.react(item_id, kind))
    }

    pub fn toggle_save(&mut self, item_id: u64) -> Option<ReactionState> {
        if self.session.is_none() || self.catalog.get(item_id).is_none() {
            return None;
        }
        Some(self.reactions.toggle_save(item_id))
    }

    pub fn toggle_comment_like(&mut self, comment_id: u64) -> Option<bool> {
        self.session.as_ref()?;
        Some(self.reactions.toggle_comment_like(comment_id))
    }

    /// Likes shown for an item, including the viewer's own like
    pub fn displayed_likes(&self, item_id: u64) -> Option<u64> {
        self.catalog
            .get(item_id)
            .map(|item| self.reactions.item(item_id).displayed_likes(item.likes))
    }

    // ─── Comments ──────────────────────────────────────────────────────────

    pub fn comments(&mut self, video_id: u64) -> &CommentThread {
        self.comments.thread(video_id)
    }

    pub fn existing_comments(&self, video_id: u64) -> Option<&CommentThread> {
        self.comments.existing_thread(video_id)
    }

    /// Posts a comment as the signed-in viewer, returning its id.
    ///
    /// A blank body is rejected quietly: the comment box simply stays put.
    ///
    /// # Errors
    ///
    /// - `Error::SignInRequired` without a session
    /// - `Error::NotPermitted` if the role may not comment
    /// - `Error::MissingRequiredField` for a blank body
    pub fn post_comment(
        &mut self,
        video_id: u64,
        body: &str,
        sink: &mut impl NotificationSink,
    ) -> Result<u64> {
        let Some(session) = &self.session else {
            sink.error(Error::SignInRequired.user_message());
            return Err(Error::SignInRequired);
        };
        if !session.can_comment() {
            sink.error(Error::NotPermitted.user_message());
            return Err(Error::NotPermitted);
        }
        validators::require("comment", body)
            .map_err(|field| Error::MissingRequiredField { field })?;

        let body = validators::sanitize_body(body);
        let author = session.name.clone();
        let id = self.comments.post(video_id, &author, &body).id;
        tracing::debug!("Comment {id} posted on video {video_id}");
        Ok(id)
    }

    // ─── Upload ────────────────────────────────────────────────────────────

    /// Publishes an upload as the signed-in admin, returning the new item id.
    ///
    /// # Errors
    ///
    /// - `Error::SignInRequired` without a session
    /// - `Error::NotPermitted` for non-admin sessions
    /// - `Error::MissingRequiredField` / `Error::InvalidInput` from the draft
    /// - `Error::InvalidInput` when the catalog has no ids left
    pub fn publish(&mut self, draft: UploadDraft, sink: &mut impl NotificationSink) -> Result<u64> {
        let result = self.try_publish(draft);
        match &result {
            Ok(id) => {
                tracing::info!("Published video {id}");
                sink.success("Video uploaded successfully!");
            }
            Err(err) => {
                tracing::debug!("Upload rejected: {err}");
                sink.error(err.user_message());
            }
        }
        result
    }

    fn try_publish(&mut self, draft: UploadDraft) -> Result<u64> {
        let session = self.session.as_ref().ok_or(Error::SignInRequired)?;
        if !session.can_upload() {
            return Err(Error::NotPermitted);
        }
        let item = draft.into_item(&session.name, chrono::Utc::now())?;
        self.catalog.publish(item)
    }
}
