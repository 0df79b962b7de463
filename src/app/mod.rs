pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod ui_components;
pub mod view;

use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::core::directory::MockDirectory;
use crate::core::filter::Section;
use crate::core::notify::{NoticeKind, NotificationSink};
use crate::core::portal::Portal;
use crate::core::reaction::ReactionKind;
use crate::theme::{AppTheme, ThemeChoice};
use forms::{AuthForm, AuthTab, UploadForm};
use iced::{Element, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Banners kept in the queue; only the newest two are drawn
const MAX_BANNERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Success,
    Error,
}

impl From<NoticeKind> for BannerSeverity {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => Self::Success,
            NoticeKind::Error => Self::Error,
        }
    }
}

/// Transient notification drawn at the top-right
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub severity: BannerSeverity,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Banner {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

fn push_banner_into(
    banners: &mut Vec<Banner>,
    message: impl Into<String>,
    severity: BannerSeverity,
    duration_secs: u64,
) {
    banners.insert(
        0,
        Banner {
            message: message.into(),
            severity,
            created_at: Instant::now(),
            duration: Duration::from_secs(duration_secs),
        },
    );
    banners.truncate(MAX_BANNERS);
}

/// Routes portal notices into the banner stack
pub struct BannerQueue<'a> {
    banners: &'a mut Vec<Banner>,
}

impl<'a> BannerQueue<'a> {
    pub fn new(banners: &'a mut Vec<Banner>) -> Self {
        Self { banners }
    }
}

impl NotificationSink for BannerQueue<'_> {
    fn notify(&mut self, kind: NoticeKind, message: String) {
        let secs = match kind {
            NoticeKind::Success => 3,
            NoticeKind::Error => 5,
        };
        push_banner_into(self.banners, message, kind.into(), secs);
    }
}

pub struct State {
    pub portal: Portal,
    pub config: AppConfig,
    pub current_theme: ThemeChoice,
    pub theme: AppTheme,
    pub section: Section,
    pub search: String,
    pub sidebar_open: bool,
    pub auth_form: Option<AuthForm>,
    pub upload_form: Option<UploadForm>,
    pub comment_draft: String,
    pub show_full_description: bool,
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Browsing
    SearchChanged(String),
    ClearSearch,
    SectionSelected(Section),
    ToggleSidebar,
    VideoSelected(u64),
    BackToFeed,
    ToggleDescription,
    // Reactions
    React(u64, ReactionKind),
    ToggleSave(u64),
    ToggleCommentLike(u64),
    // Comments
    CommentDraftChanged(String),
    SubmitComment,
    // Session
    OpenAuth(AuthTab),
    CloseAuth,
    AuthTabChanged(AuthTab),
    AuthNameChanged(String),
    AuthEmailChanged(String),
    AuthPasswordChanged(String),
    FillDemoAccount(usize),
    SubmitAuth,
    Logout,
    // Upload
    OpenUpload,
    CloseUpload,
    UploadTitleChanged(String),
    UploadDescriptionChanged(String),
    UploadThumbnailChanged(String),
    PickVideoFile,
    VideoFilePicked(Option<PathBuf>),
    ClearVideoFile,
    SubmitUpload,
    // Settings
    CycleTheme,
    ToggleCompactGrid(bool),
    ConfigSaved(Result<(), String>),
    // Banners
    PruneBanners,
    DismissBanner(usize),
    EventOccurred(iced::Event),
}

impl State {
    /// Boots the GUI: preferences from disk, catalog from `catalog_override`,
    /// the configured path, or the built-in seed.
    pub fn new(catalog_override: Option<PathBuf>) -> (Self, Task<Message>) {
        let config = crate::config::load_config();
        let catalog_path = catalog_override.or_else(|| config.catalog_path.clone());

        let mut load_error = None;
        let catalog = match catalog_path {
            Some(path) => Catalog::load_json(&path).unwrap_or_else(|e| {
                tracing::warn!("Falling back to demo catalog, {} failed: {e}", path.display());
                load_error = Some(format!("Could not load catalog: {}", e.user_message()));
                Catalog::seeded()
            }),
            None => Catalog::seeded(),
        };

        let mut state = Self::from_parts(Portal::new(catalog, MockDirectory::seeded()), config);
        if let Some(message) = load_error {
            state.push_banner(message, BannerSeverity::Error, 8);
        }
        (state, Task::none())
    }

    pub fn from_parts(portal: Portal, config: AppConfig) -> Self {
        let current_theme = config.theme_choice;
        Self {
            portal,
            current_theme,
            theme: current_theme.to_theme(),
            section: config.initial_section(),
            search: String::new(),
            sidebar_open: true,
            auth_form: None,
            upload_form: None,
            comment_draft: String::new(),
            show_full_description: false,
            banners: Vec::new(),
            config,
        }
    }

    pub fn title(&self) -> String {
        match self.portal.selected_item() {
            Some(item) => format!("{} - GlassTube", item.title),
            None => "GlassTube".to_string(),
        }
    }

    pub fn iced_theme(&self) -> iced::Theme {
        if self.theme.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn push_banner(
        &mut self,
        message: impl Into<String>,
        severity: BannerSeverity,
        duration_secs: u64,
    ) {
        push_banner_into(&mut self.banners, message, severity, duration_secs);
    }

    pub fn prune_expired_banners(&mut self) {
        let now = Instant::now();
        self.banners.retain(|b| !b.is_expired(now));
    }

    /// Portal plus a sink that feeds the banner stack, borrowed together
    pub fn portal_and_sink(&mut self) -> (&mut Portal, BannerQueue<'_>) {
        (&mut self.portal, BannerQueue::new(&mut self.banners))
    }

    fn save_config(&self) -> Task<Message> {
        let config = self.config.clone();
        Task::perform(
            async move {
                crate::config::save_config(&config)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::ConfigSaved,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => handlers::handle_search_changed(self, query),
            Message::ClearSearch => handlers::handle_clear_search(self),
            Message::SectionSelected(section) => handlers::handle_section_selected(self, section),
            Message::ToggleSidebar => handlers::handle_toggle_sidebar(self),
            Message::VideoSelected(id) => handlers::handle_video_selected(self, id),
            Message::BackToFeed => handlers::handle_back_to_feed(self),
            Message::ToggleDescription => {
                self.show_full_description = !self.show_full_description;
            }
            Message::React(id, kind) => handlers::handle_react(self, id, kind),
            Message::ToggleSave(id) => handlers::handle_toggle_save(self, id),
            Message::ToggleCommentLike(id) => handlers::handle_toggle_comment_like(self, id),
            Message::CommentDraftChanged(body) => self.comment_draft = body,
            Message::SubmitComment => handlers::handle_submit_comment(self),
            Message::OpenAuth(tab) => handlers::handle_open_auth(self, tab),
            Message::CloseAuth => self.auth_form = None,
            Message::AuthTabChanged(tab) => {
                if let Some(form) = &mut self.auth_form {
                    form.switch_tab(tab);
                }
            }
            Message::AuthNameChanged(s) => {
                if let Some(form) = &mut self.auth_form {
                    form.name = s;
                }
            }
            Message::AuthEmailChanged(s) => {
                if let Some(form) = &mut self.auth_form {
                    form.email = s;
                }
            }
            Message::AuthPasswordChanged(s) => {
                if let Some(form) = &mut self.auth_form {
                    form.password = s;
                }
            }
            Message::FillDemoAccount(index) => {
                if !self.portal.is_signed_in() {
                    self.auth_form
                        .get_or_insert_with(|| AuthForm::new(AuthTab::SignIn))
                        .fill_demo(index);
                }
            }
            Message::SubmitAuth => handlers::handle_submit_auth(self),
            Message::Logout => handlers::handle_logout(self),
            Message::OpenUpload => handlers::handle_open_upload(self),
            Message::CloseUpload => self.upload_form = None,
            Message::UploadTitleChanged(s) => {
                if let Some(form) = &mut self.upload_form {
                    form.title = s;
                    form.validate_realtime();
                }
            }
            Message::UploadDescriptionChanged(s) => {
                if let Some(form) = &mut self.upload_form {
                    form.description = s;
                    form.validate_realtime();
                }
            }
            Message::UploadThumbnailChanged(s) => {
                if let Some(form) = &mut self.upload_form {
                    form.thumbnail_url = s;
                    form.validate_realtime();
                }
            }
            Message::PickVideoFile => return handlers::handle_pick_video_file(self),
            Message::VideoFilePicked(path) => handlers::handle_video_file_picked(self, path),
            Message::ClearVideoFile => {
                if let Some(form) = &mut self.upload_form {
                    form.video_file = None;
                }
            }
            Message::SubmitUpload => handlers::handle_submit_upload(self),
            Message::CycleTheme => return handlers::handle_cycle_theme(self),
            Message::ToggleCompactGrid(enabled) => {
                return handlers::handle_toggle_compact_grid(self, enabled);
            }
            Message::ConfigSaved(result) => handlers::handle_config_saved(self, result),
            Message::PruneBanners => handlers::handle_prune_banners(self),
            Message::DismissBanner(index) => handlers::handle_dismiss_banner(self, index),
            Message::EventOccurred(event) => return handlers::handle_event(self, &event),
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch(vec![
            iced::event::listen().map(Message::EventOccurred),
            if self.banners.is_empty() {
                iced::Subscription::none()
            } else {
                iced::time::every(Duration::from_secs(1)).map(|_| Message::PruneBanners)
            },
        ])
    }
}
