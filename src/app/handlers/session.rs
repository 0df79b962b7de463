//! Sign in, registration and sign out

use crate::app::State;
use crate::app::forms::{AuthForm, AuthTab};
use crate::core::filter::Section;

pub(crate) fn handle_open_auth(state: &mut State, tab: AuthTab) {
    state.upload_form = None;
    state.auth_form = Some(AuthForm::new(tab));
}

/// Submits the open dialog; it closes only on success
pub(crate) fn handle_submit_auth(state: &mut State) {
    let Some(form) = state.auth_form.as_ref() else {
        return;
    };
    if !form.can_submit() {
        return;
    }
    let (tab, name, email, password) = (
        form.tab,
        form.name.clone(),
        form.email.clone(),
        form.password.clone(),
    );

    let (portal, mut sink) = state.portal_and_sink();
    let result = match tab {
        AuthTab::SignIn => portal.login(&email, &password, &mut sink).map(|_| ()),
        AuthTab::Register => portal
            .register(&name, &email, &password, &mut sink)
            .map(|_| ()),
    };

    match result {
        Ok(()) => state.auth_form = None,
        Err(_) => {
            if let Some(form) = &mut state.auth_form {
                form.password.clear();
            }
        }
    }
}

pub(crate) fn handle_logout(state: &mut State) {
    let (portal, mut sink) = state.portal_and_sink();
    portal.logout(&mut sink);
    state.upload_form = None;
    state.comment_draft.clear();
    if state.section.requires_session() {
        state.section = Section::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::BannerSeverity;
    use crate::app::handlers::test_utils::{create_test_state, create_viewer_state};
    use crate::core::reaction::ReactionKind;
    use crate::core::session::Role;

    fn open_with(state: &mut State, tab: AuthTab, name: &str, email: &str, password: &str) {
        handle_open_auth(state, tab);
        if let Some(form) = &mut state.auth_form {
            form.name = name.to_string();
            form.email = email.to_string();
            form.password = password.to_string();
        }
    }

    #[test]
    fn test_sign_in_closes_dialog() {
        let mut state = create_test_state();
        open_with(&mut state, AuthTab::SignIn, "", "admin@glassy.tube", "admin123");
        handle_submit_auth(&mut state);
        assert!(state.auth_form.is_none());
        assert_eq!(state.portal.session().map(|s| s.role), Some(Role::Admin));
        assert_eq!(state.banners[0].message, "Welcome back, Admin User!");
    }

    #[test]
    fn test_bad_password_keeps_dialog_open() {
        let mut state = create_test_state();
        open_with(&mut state, AuthTab::SignIn, "", "admin@glassy.tube", "wrong");
        handle_submit_auth(&mut state);
        let form = state.auth_form.as_ref().unwrap();
        assert_eq!(form.email, "admin@glassy.tube");
        assert!(form.password.is_empty());
        assert!(state.portal.session().is_none());
        assert_eq!(state.banners[0].severity, BannerSeverity::Error);
    }

    #[test]
    fn test_incomplete_form_does_nothing() {
        let mut state = create_test_state();
        open_with(&mut state, AuthTab::Register, "", "new@glassy.tube", "pw");
        handle_submit_auth(&mut state);
        assert!(state.auth_form.is_some());
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_register_signs_in() {
        let mut state = create_test_state();
        open_with(&mut state, AuthTab::Register, "Sam", "sam@example.com", "pw");
        handle_submit_auth(&mut state);
        assert!(state.auth_form.is_none());
        assert_eq!(state.portal.session().map(|s| s.role), Some(Role::User));
    }

    #[test]
    fn test_logout_resets_signed_in_view() {
        let mut state = create_viewer_state();
        state.section = Section::WatchLater;
        state.portal.select(1);
        state.portal.react(1, ReactionKind::Like);

        handle_logout(&mut state);
        assert_eq!(state.section, Section::Home);
        assert!(state.portal.selected_item().is_none());
        assert!(!state.portal.reaction(1).liked());
        assert_eq!(state.banners[0].message, "Logged out successfully");
    }
}
