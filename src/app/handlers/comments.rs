//! Comment submission

use crate::app::State;

pub(crate) fn handle_submit_comment(state: &mut State) {
    let Some(video_id) = state.portal.selected_item().map(|item| item.id) else {
        return;
    };
    let body = state.comment_draft.clone();

    let (portal, mut sink) = state.portal_and_sink();
    if portal.post_comment(video_id, &body, &mut sink).is_ok() {
        state.comment_draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_test_state, create_viewer_state};

    #[test]
    fn test_submit_prepends_and_clears_draft() {
        let mut state = create_viewer_state();
        state.portal.select(2);
        state.comment_draft = "Clean cable management".to_string();
        handle_submit_comment(&mut state);

        assert!(state.comment_draft.is_empty());
        let thread = state.portal.comments(2);
        assert_eq!(thread.len(), 4);
        assert_eq!(thread.entries()[0].body, "Clean cable management");
        assert_eq!(thread.entries()[0].author, "Viewer User");
    }

    #[test]
    fn test_blank_draft_is_kept_quietly() {
        let mut state = create_viewer_state();
        state.portal.select(2);
        state.comment_draft = "   ".to_string();
        handle_submit_comment(&mut state);
        assert_eq!(state.comment_draft, "   ");
        assert!(state.banners.iter().all(|b| b.message != "Please fill in all required fields"));
    }

    #[test]
    fn test_signed_out_submit_keeps_draft() {
        let mut state = create_test_state();
        state.portal.select(2);
        state.comment_draft = "hello".to_string();
        handle_submit_comment(&mut state);
        assert_eq!(state.comment_draft, "hello");
        assert_eq!(state.banners[0].message, "Sign in to continue");
    }
}
