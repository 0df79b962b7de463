//! Browsing: search, sections and the watch page selection

use crate::app::State;
use crate::core::filter::Section;

pub(crate) fn handle_search_changed(state: &mut State, query: String) {
    state.search = query;
    // Results replace the watch page, like a site search would
    if !state.search.trim().is_empty() {
        state.portal.deselect();
    }
}

pub(crate) fn handle_clear_search(state: &mut State) {
    state.search.clear();
}

/// Switches section; signed-in sections are ignored without a session
pub(crate) fn handle_section_selected(state: &mut State, section: Section) {
    if section.requires_session() && !state.portal.is_signed_in() {
        return;
    }
    tracing::debug!("Section changed to {section}");
    state.section = section;
    state.portal.deselect();
}

pub(crate) fn handle_video_selected(state: &mut State, id: u64) {
    if state.portal.select(id).is_some() {
        state.portal.comments(id);
        state.show_full_description = false;
        state.comment_draft.clear();
    }
}

pub(crate) fn handle_back_to_feed(state: &mut State) {
    state.portal.deselect();
}
