//! Upload dialog
//!
//! Handles:
//! - Opening the dialog (admins only)
//! - Picking a local video file
//! - Publishing the draft through the portal

use crate::app::forms::{AuthForm, AuthTab, UploadForm};
use crate::app::{BannerSeverity, Message, State};
use crate::core::error::Error;
use crate::core::filter::Section;
use crate::core::session::UserSession;
use iced::Task;
use std::path::PathBuf;

/// Video extensions offered by the file picker
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "avi", "m4v"];

pub(crate) fn handle_open_upload(state: &mut State) {
    match state.portal.session().map(UserSession::can_upload) {
        None => state.auth_form = Some(AuthForm::new(AuthTab::SignIn)),
        Some(false) => {
            state.push_banner(
                Error::NotPermitted.user_message(),
                BannerSeverity::Error,
                5,
            );
        }
        Some(true) => {
            state.auth_form = None;
            state.upload_form = Some(UploadForm::default());
        }
    }
}

pub(crate) fn handle_pick_video_file(state: &mut State) -> Task<Message> {
    let Some(form) = &mut state.upload_form else {
        return Task::none();
    };
    if form.picking_file {
        return Task::none();
    }
    form.picking_file = true;

    Task::perform(
        async move {
            use rfd::AsyncFileDialog;
            AsyncFileDialog::new()
                .set_title("Choose a video")
                .add_filter("Video", VIDEO_EXTENSIONS)
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::VideoFilePicked,
    )
}

/// A cancelled picker keeps whatever file was chosen before
pub(crate) fn handle_video_file_picked(state: &mut State, path: Option<PathBuf>) {
    if let Some(form) = &mut state.upload_form {
        form.picking_file = false;
        if let Some(path) = path {
            tracing::debug!("Picked upload file {}", path.display());
            form.video_file = Some(path);
        }
    }
}

pub(crate) fn handle_submit_upload(state: &mut State) {
    let Some(form) = &state.upload_form else {
        return;
    };
    let draft = form.draft();

    let (portal, mut sink) = state.portal_and_sink();
    match portal.publish(draft, &mut sink) {
        Ok(id) => {
            state.upload_form = None;
            state.search.clear();
            state.section = Section::Home;
            super::handle_video_selected(state, id);
        }
        Err(err) => {
            if let Some(form) = &mut state.upload_form {
                form.apply_error(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{
        create_admin_state, create_test_state, create_viewer_state,
    };

    #[test]
    fn test_open_upload_gates() {
        let mut state = create_test_state();
        handle_open_upload(&mut state);
        assert!(state.upload_form.is_none());
        assert!(state.auth_form.is_some());

        let mut state = create_viewer_state();
        handle_open_upload(&mut state);
        assert!(state.upload_form.is_none());
        assert_eq!(state.banners[0].message, "Only admins can upload videos");

        let mut state = create_admin_state();
        handle_open_upload(&mut state);
        assert!(state.upload_form.is_some());
    }

    #[test]
    fn test_cancelled_pick_keeps_previous_file() {
        let mut state = create_admin_state();
        handle_open_upload(&mut state);
        handle_video_file_picked(&mut state, Some(PathBuf::from("/videos/a.mp4")));
        handle_video_file_picked(&mut state, None);
        let form = state.upload_form.as_ref().unwrap();
        assert_eq!(form.video_file, Some(PathBuf::from("/videos/a.mp4")));
        assert!(!form.picking_file);
    }

    #[test]
    fn test_submit_missing_fields_marks_form() {
        let mut state = create_admin_state();
        handle_open_upload(&mut state);
        handle_submit_upload(&mut state);

        let form = state.upload_form.as_ref().unwrap();
        assert!(form.errors.title.is_some());
        assert!(form.errors.description.is_some());
        assert_eq!(state.banners[0].message, "Please fill in all required fields");
        assert_eq!(state.portal.catalog().len(), 6);
    }

    #[test]
    fn test_submit_publishes_and_opens_video() {
        let mut state = create_admin_state();
        handle_open_upload(&mut state);
        if let Some(form) = &mut state.upload_form {
            form.title = "Launch Day".to_string();
            form.description = "We shipped".to_string();
        }
        handle_submit_upload(&mut state);

        assert!(state.upload_form.is_none());
        assert_eq!(state.portal.catalog().items()[0].title, "Launch Day");
        assert_eq!(
            state.portal.selected_item().map(|i| i.id),
            Some(state.portal.catalog().items()[0].id)
        );
        assert_eq!(state.banners[0].message, "Video uploaded successfully!");
    }
}
