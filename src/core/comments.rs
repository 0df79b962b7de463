//! Per-video comment threads

use std::collections::HashMap;

/// Age label for anything created during this run
pub const JUST_NOW: &str = "Just now";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub id: u64,
    pub author: String,
    pub body: String,
    pub likes: u64,
    pub age: String,
}

/// Comments for a single video, newest first
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    entries: Vec<CommentEntry>,
}

impl CommentThread {
    pub fn entries(&self) -> &[CommentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const SEED_COMMENTS: &[(&str, &str, u64, &str)] = &[
    (
        "Tech Enthusiast",
        "This is an amazing video! Really helpful content. Thanks for sharing!",
        42,
        "2 days ago",
    ),
    (
        "Code Master",
        "Great tutorial! Could you make a follow-up video on advanced techniques?",
        28,
        "1 week ago",
    ),
    (
        "Developer Pro",
        "Exactly what I was looking for. Keep up the great work! 🔥",
        15,
        "3 weeks ago",
    ),
];

/// All comment threads, created lazily per video
///
/// Every new thread starts with the demo comments. Ids are unique across
/// the whole book, so comment likes can be keyed by id alone.
#[derive(Debug, Clone, Default)]
pub struct CommentBook {
    threads: HashMap<u64, CommentThread>,
    next_id: u64,
}

impl CommentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread for `video_id`, seeding it on first access
    pub fn thread(&mut self, video_id: u64) -> &CommentThread {
        self.ensure_thread(video_id)
    }

    /// Thread for `video_id` if it has been opened before
    pub fn existing_thread(&self, video_id: u64) -> Option<&CommentThread> {
        self.threads.get(&video_id)
    }

    /// Prepends a comment to the video's thread and returns it.
    ///
    /// Callers validate the author's session and sanitize the body.
    pub fn post(&mut self, video_id: u64, author: &str, body: &str) -> &CommentEntry {
        self.ensure_thread(video_id);
        let id = self.allocate_id();
        let thread = self.threads.entry(video_id).or_default();
        thread.entries.insert(
            0,
            CommentEntry {
                id,
                author: author.to_string(),
                body: body.to_string(),
                likes: 0,
                age: JUST_NOW.to_string(),
            },
        );
        &thread.entries[0]
    }

    fn ensure_thread(&mut self, video_id: u64) -> &CommentThread {
        if !self.threads.contains_key(&video_id) {
            let entries = SEED_COMMENTS
                .iter()
                .map(|&(author, body, likes, age)| CommentEntry {
                    id: self.allocate_id(),
                    author: author.to_string(),
                    body: body.to_string(),
                    likes,
                    age: age.to_string(),
                })
                .collect();
            self.threads.insert(video_id, CommentThread { entries });
        }
        self.threads.entry(video_id).or_default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_seeded_on_first_access() {
        let mut book = CommentBook::new();
        assert!(book.existing_thread(1).is_none());
        let thread = book.thread(1);
        assert_eq!(thread.len(), 3);
        assert_eq!(thread.entries()[0].author, "Tech Enthusiast");
        assert_eq!(thread.entries()[0].likes, 42);
        assert!(book.existing_thread(1).is_some());
    }

    #[test]
    fn test_post_prepends() {
        let mut book = CommentBook::new();
        let posted = book.post(4, "Viewer User", "Stunning footage").clone();
        assert_eq!(posted.likes, 0);
        assert_eq!(posted.age, JUST_NOW);

        let thread = book.thread(4);
        assert_eq!(thread.len(), 4);
        assert_eq!(thread.entries()[0], posted);
    }

    #[test]
    fn test_threads_are_independent() {
        let mut book = CommentBook::new();
        book.post(1, "A", "first");
        assert_eq!(book.thread(2).len(), 3);
        assert_eq!(book.thread(1).len(), 4);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let mut book = CommentBook::new();
        book.post(1, "A", "x");
        book.post(2, "B", "y");
        let mut ids: Vec<u64> = [1, 2]
            .iter()
            .flat_map(|v| book.existing_thread(*v).unwrap().entries().iter().map(|e| e.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
