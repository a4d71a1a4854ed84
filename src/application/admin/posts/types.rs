use crate::domain::{
    entities::{Author, Post},
    types::PostStatus,
};

/// Shown when a submission resolves to no author.
pub const AUTHOR_REQUIRED: &str = "Author is required.";

/// Shown when a save fails without structured field errors.
pub const SAVE_FAILED: &str = "An error occurred while saving the post.";

/// Destinations a controller can ask the shell to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

/// Deletion sub-state of the post list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    ConfirmPending(i64),
    Deleting(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No target was pending; nothing happened.
    Skipped,
    Deleted(i64),
    Failed(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Initializing,
    Ready,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(Route),
    /// The form stays open; `errors()` holds the reasons.
    Rejected,
}

/// Editable, in-memory form state for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Author,
    pub status: PostStatus,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            author: Author::placeholder(),
            status: PostStatus::default(),
        }
    }
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: Author {
                id: post.author_id.unwrap_or(0),
                name: post.author.clone().unwrap_or_default(),
            },
            status: post.status,
        }
    }
}
