//! Like/dislike/save reactions
//!
//! Like and dislike are mutually exclusive; save is independent. None of the
//! functions here check for a session: gating is the caller's job (see
//! [`crate::core::portal::Portal`]).

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Computes the next `(like, dislike)` pair.
///
/// The toggled flag flips; the opposite flag is always cleared.
pub fn toggle(kind: ReactionKind, like: bool, dislike: bool) -> (bool, bool) {
    match kind {
        ReactionKind::Like => (!like, false),
        ReactionKind::Dislike => (false, !dislike),
    }
}

/// One viewer's reaction to one item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionState {
    liked: bool,
    disliked: bool,
    saved: bool,
}

impl ReactionState {
    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn disliked(&self) -> bool {
        self.disliked
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn apply(&mut self, kind: ReactionKind) {
        (self.liked, self.disliked) = toggle(kind, self.liked, self.disliked);
    }

    pub fn toggle_save(&mut self) {
        self.saved = !self.saved;
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Like count to display: the base count plus this viewer's like
    pub fn displayed_likes(&self, base: u64) -> u64 {
        base + u64::from(self.liked)
    }
}

/// All reactions for the current viewer, keyed by item and comment id
#[derive(Debug, Clone, Default)]
pub struct ReactionBoard {
    items: HashMap<u64, ReactionState>,
    liked_comments: HashSet<u64>,
}

impl ReactionBoard {
    pub fn item(&self, id: u64) -> ReactionState {
        self.items.get(&id).copied().unwrap_or_default()
    }

    pub fn react(&mut self, id: u64, kind: ReactionKind) -> ReactionState {
        self.update_item(id, |state| state.apply(kind))
    }

    pub fn toggle_save(&mut self, id: u64) -> ReactionState {
        self.update_item(id, ReactionState::toggle_save)
    }

    fn update_item(&mut self, id: u64, f: impl FnOnce(&mut ReactionState)) -> ReactionState {
        let state = self.items.entry(id).or_default();
        f(state);
        let result = *state;
        // Keep the map sparse so "all off" and "never touched" look the same
        if result.is_default() {
            self.items.remove(&id);
        }
        result
    }

    /// Item ids the viewer currently likes, ascending
    pub fn liked_items(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .items
            .iter()
            .filter(|(_, s)| s.liked)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Item ids the viewer saved, ascending
    pub fn saved_items(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .items
            .iter()
            .filter(|(_, s)| s.saved)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn comment_liked(&self, comment_id: u64) -> bool {
        self.liked_comments.contains(&comment_id)
    }

    /// Flips the like on a comment, returning the new flag
    pub fn toggle_comment_like(&mut self, comment_id: u64) -> bool {
        if self.liked_comments.remove(&comment_id) {
            false
        } else {
            self.liked_comments.insert(comment_id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.liked_comments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_table() {
        assert_eq!(toggle(ReactionKind::Like, false, false), (true, false));
        assert_eq!(toggle(ReactionKind::Like, true, false), (false, false));
        assert_eq!(toggle(ReactionKind::Like, false, true), (true, false));
        assert_eq!(toggle(ReactionKind::Dislike, false, false), (false, true));
        assert_eq!(toggle(ReactionKind::Dislike, false, true), (false, false));
        assert_eq!(toggle(ReactionKind::Dislike, true, false), (false, true));
    }

    #[test]
    fn test_save_is_independent() {
        let mut state = ReactionState::default();
        state.apply(ReactionKind::Like);
        state.toggle_save();
        assert!(state.liked() && state.saved());
        state.apply(ReactionKind::Dislike);
        assert!(state.disliked() && state.saved() && !state.liked());
    }

    #[test]
    fn test_displayed_likes() {
        let mut state = ReactionState::default();
        assert_eq!(state.displayed_likes(45_000), 45_000);
        state.apply(ReactionKind::Like);
        assert_eq!(state.displayed_likes(45_000), 45_001);
        state.apply(ReactionKind::Dislike);
        assert_eq!(state.displayed_likes(45_000), 45_000);
    }

    #[test]
    fn test_board_stays_sparse() {
        let mut board = ReactionBoard::default();
        board.react(3, ReactionKind::Like);
        board.toggle_save(5);
        assert_eq!(board.liked_items(), vec![3]);
        assert_eq!(board.saved_items(), vec![5]);

        board.react(3, ReactionKind::Like);
        board.toggle_save(5);
        assert!(board.items.is_empty());
        assert_eq!(board.item(3), ReactionState::default());
    }

    #[test]
    fn test_comment_likes() {
        let mut board = ReactionBoard::default();
        assert!(board.toggle_comment_like(7));
        assert!(board.comment_liked(7));
        assert!(!board.toggle_comment_like(7));
        assert!(!board.comment_liked(7));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = ReactionBoard::default();
        board.react(1, ReactionKind::Dislike);
        board.toggle_comment_like(2);
        board.clear();
        assert!(!board.item(1).disliked());
        assert!(!board.comment_liked(2));
    }

    fn arb_kind() -> impl Strategy<Value = ReactionKind> {
        prop_oneof![Just(ReactionKind::Like), Just(ReactionKind::Dislike)]
    }

    proptest! {
        #[test]
        fn prop_like_twice_restores_like(like in any::<bool>(), dislike in any::<bool>()) {
            let (l1, d1) = toggle(ReactionKind::Like, like, dislike);
            let (l2, _) = toggle(ReactionKind::Like, l1, d1);
            prop_assert_eq!(l2, like);
        }

        #[test]
        fn prop_never_both(kinds in prop::collection::vec(arb_kind(), 0..32)) {
            let mut state = ReactionState::default();
            for kind in kinds {
                state.apply(kind);
                prop_assert!(!(state.liked() && state.disliked()));
            }
        }
    }
}
