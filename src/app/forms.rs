//! Dialog form state
//!
//! Forms only hold what the user typed plus per-field errors; the rules live
//! in `core` and are reached through the [`crate::core::portal::Portal`].

use crate::core::directory::DEMO_ACCOUNTS;
use crate::core::error::Error;
use crate::core::upload::UploadDraft;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    SignIn,
    Register,
}

impl AuthTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::Register => "Create account",
        }
    }
}

/// Sign-in / registration dialog
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn new(tab: AuthTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Switches tabs, keeping the email but never the password
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.password.clear();
    }

    /// Whether every field the current tab needs has something in it
    pub fn can_submit(&self) -> bool {
        let base = !self.email.trim().is_empty() && !self.password.is_empty();
        match self.tab {
            AuthTab::SignIn => base,
            AuthTab::Register => base && !self.name.trim().is_empty(),
        }
    }

    /// Prefills one of the demo accounts listed under the form
    pub fn fill_demo(&mut self, index: usize) {
        if let Some(&(email, password, _, _)) = DEMO_ACCOUNTS.get(index) {
            self.tab = AuthTab::SignIn;
            self.email = email.to_string();
            self.password = password.to_string();
        }
    }
}

/// Field errors shown under the upload inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl UploadErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.thumbnail.is_none()
    }
}

/// Upload dialog
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_file: Option<PathBuf>,
    pub picking_file: bool,
    pub errors: UploadErrors,
}

impl UploadForm {
    pub fn draft(&self) -> UploadDraft {
        UploadDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            video_file: self.video_file.clone(),
        }
    }

    /// Re-checks the thumbnail as the user types; required-field errors
    /// clear once the field is filled but only appear after a submit.
    pub fn validate_realtime(&mut self) {
        self.errors.thumbnail =
            crate::validators::validate_thumbnail_url(&self.thumbnail_url).err();
        if !self.title.trim().is_empty() {
            self.errors.title = None;
        }
        if !self.description.trim().is_empty() {
            self.errors.description = None;
        }
    }

    /// Maps a rejected submit onto the field it concerns
    pub fn apply_error(&mut self, err: &Error) {
        match err {
            Error::MissingRequiredField { .. } => {
                if self.title.trim().is_empty() {
                    self.errors.title = Some("Title is required".to_string());
                }
                if self.description.trim().is_empty() {
                    self.errors.description = Some("Description is required".to_string());
                }
            }
            Error::InvalidInput {
                field: "thumbnail",
                message,
            } => self.errors.thumbnail = Some(message.clone()),
            _ => {}
        }
    }

    /// Short label for the picked file
    pub fn file_label(&self) -> String {
        self.video_file.as_ref().map_or_else(
            || "No file selected (sample video will be used)".to_string(),
            |path| crate::app::helpers::truncate_path_smart(&path.display().to_string(), 48),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_needs_email_and_password() {
        let mut form = AuthForm::new(AuthTab::SignIn);
        assert!(!form.can_submit());
        form.email = "a@b.co".to_string();
        form.password = "pw".to_string();
        assert!(form.can_submit());
    }

    #[test]
    fn test_register_also_needs_name() {
        let mut form = AuthForm::new(AuthTab::Register);
        form.email = "a@b.co".to_string();
        form.password = "pw".to_string();
        assert!(!form.can_submit());
        form.name = "Sam".to_string();
        assert!(form.can_submit());
    }

    #[test]
    fn test_switch_tab_drops_password() {
        let mut form = AuthForm::new(AuthTab::SignIn);
        form.email = "a@b.co".to_string();
        form.password = "pw".to_string();
        form.switch_tab(AuthTab::Register);
        assert_eq!(form.email, "a@b.co");
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_fill_demo() {
        let mut form = AuthForm::new(AuthTab::Register);
        form.fill_demo(0);
        assert_eq!(form.tab, AuthTab::SignIn);
        assert_eq!(form.email, "admin@glassy.tube");
        assert_eq!(form.password, "admin123");

        form.fill_demo(99);
        assert_eq!(form.email, "admin@glassy.tube");
    }

    #[test]
    fn test_upload_errors_after_failed_submit() {
        let mut form = UploadForm {
            title: "Only a title".to_string(),
            ..UploadForm::default()
        };
        form.apply_error(&Error::MissingRequiredField {
            field: "description",
        });
        assert!(form.errors.title.is_none());
        assert!(form.errors.description.is_some());

        form.description = "Now filled".to_string();
        form.validate_realtime();
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_realtime_thumbnail_check() {
        let mut form = UploadForm {
            thumbnail_url: "ftp://nope".to_string(),
            ..UploadForm::default()
        };
        form.validate_realtime();
        assert!(form.errors.thumbnail.is_some());
        form.thumbnail_url.clear();
        form.validate_realtime();
        assert!(form.errors.thumbnail.is_none());
    }
}
