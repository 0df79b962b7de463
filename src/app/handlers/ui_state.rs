//! UI state management
//!
//! Handles UI state changes:
//! - Sidebar visibility
//! - Banner management
//! - Keyboard shortcuts

use crate::app::{Message, State};
use iced::Task;
use iced::keyboard::{Key, key::Named};

pub(crate) fn handle_toggle_sidebar(state: &mut State) {
    state.sidebar_open = !state.sidebar_open;
}

pub(crate) fn handle_prune_banners(state: &mut State) {
    state.prune_expired_banners();
}

pub(crate) fn handle_dismiss_banner(state: &mut State, index: usize) {
    if index < state.banners.len() {
        state.banners.remove(index);
    }
}

/// Keyboard shortcuts
///
/// - Escape: close the topmost dialog, then leave the watch page, then clear search
/// - Ctrl+U: open the upload dialog
/// - Ctrl+B: toggle the sidebar
pub(crate) fn handle_event(state: &mut State, event: &iced::Event) -> Task<Message> {
    let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) = event
    else {
        return Task::none();
    };

    match key.as_ref() {
        Key::Named(Named::Escape) => {
            if state.upload_form.is_some() {
                return Task::done(Message::CloseUpload);
            }
            if state.auth_form.is_some() {
                return Task::done(Message::CloseAuth);
            }
            if state.portal.selected_item().is_some() {
                return Task::done(Message::BackToFeed);
            }
            if !state.search.is_empty() {
                return Task::done(Message::ClearSearch);
            }
        }
        Key::Character("u") if modifiers.command() && state.upload_form.is_none() => {
            return Task::done(Message::OpenUpload);
        }
        Key::Character("b") if modifiers.command() => {
            return Task::done(Message::ToggleSidebar);
        }
        _ => {}
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_toggle_sidebar() {
        let mut state = create_test_state();
        assert!(state.sidebar_open);
        handle_toggle_sidebar(&mut state);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_dismiss_banner_out_of_range() {
        let mut state = create_test_state();
        state.push_banner("one", crate::app::BannerSeverity::Success, 5);
        handle_dismiss_banner(&mut state, 3);
        assert_eq!(state.banners.len(), 1);
        handle_dismiss_banner(&mut state, 0);
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_non_keyboard_event_ignored() {
        let mut state = create_test_state();
        let event = iced::Event::Window(iced::window::Event::Focused);
        let _task = handle_event(&mut state, &event);
        // Should not panic
    }
}
