//! Likes, dislikes, saves and comment likes
//!
//! The buttons stay visible when signed out; pressing one opens the sign-in
//! dialog instead of reacting.

use crate::app::State;
use crate::app::forms::{AuthForm, AuthTab};
use crate::core::reaction::ReactionKind;

fn prompt_sign_in(state: &mut State) {
    if state.auth_form.is_none() {
        state.auth_form = Some(AuthForm::new(AuthTab::SignIn));
    }
}

pub(crate) fn handle_react(state: &mut State, id: u64, kind: ReactionKind) {
    if !state.portal.is_signed_in() {
        prompt_sign_in(state);
        return;
    }
    state.portal.react(id, kind);
}

pub(crate) fn handle_toggle_save(state: &mut State, id: u64) {
    if !state.portal.is_signed_in() {
        prompt_sign_in(state);
        return;
    }
    if let Some(reaction) = state.portal.toggle_save(id) {
        let message = if reaction.saved() {
            "Saved to Watch Later"
        } else {
            "Removed from Watch Later"
        };
        state.push_banner(message, crate::app::BannerSeverity::Success, 2);
    }
}

pub(crate) fn handle_toggle_comment_like(state: &mut State, comment_id: u64) {
    if state.portal.toggle_comment_like(comment_id).is_none() {
        prompt_sign_in(state);
    }
}
