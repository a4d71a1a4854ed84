//! Post list: loading, status filtering and the delete-confirmation flow.

use reqwest::Method;
use tracing::{error, info, instrument};

use crate::cache::keys;
use crate::domain::{
    entities::{ListEnvelope, Post},
    types::StatusFilter,
};
use crate::infra::api::{ApiClient, ApiError, RequestOptions};

use super::types::{DeleteOutcome, DeleteState};

pub struct PostListController {
    client: ApiClient,
    posts: Vec<Post>,
    loading: bool,
    filter: StatusFilter,
    delete: DeleteState,
}

impl PostListController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            loading: false,
            filter: StatusFilter::All,
            delete: DeleteState::Idle,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match self.delete {
            DeleteState::ConfirmPending(id) => Some(id),
            _ => None,
        }
    }

    /// Posts matching `filter`, in source order. Never mutates the loaded list.
    pub fn filtered_view(&self, filter: StatusFilter) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| filter.matches(post.status))
            .collect()
    }

    /// Posts matching the current filter.
    pub fn visible_posts(&self) -> Vec<&Post> {
        self.filtered_view(self.filter)
    }

    /// Load the post collection.
    ///
    /// A failure is logged and leaves the previously loaded posts in place;
    /// it is never surfaced to the caller.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        match self.fetch_posts().await {
            Ok(posts) => self.posts = posts,
            Err(err) => error!(error = %err, "failed to load posts"),
        }
        self.loading = false;
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let body = self.client.get(keys::BLOGS).await?;
        Ok(ListEnvelope::items(body)?)
    }

    pub fn request_delete(&mut self, id: i64) {
        self.delete = DeleteState::ConfirmPending(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::Idle;
    }

    /// Delete the pending post, then refresh the list from the network.
    ///
    /// Without a pending target this does nothing. The state returns to
    /// `Idle` whatever the outcome; a failed delete is logged, not returned.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let DeleteState::ConfirmPending(id) = self.delete else {
            return DeleteOutcome::Skipped;
        };
        self.delete = DeleteState::Deleting(id);

        let outcome = match self
            .client
            .fetch(&keys::blog(id), RequestOptions::new(Method::DELETE))
            .await
        {
            Ok(_) => {
                info!(post_id = id, "post deleted");
                self.client.invalidate(keys::BLOGS);
                self.load().await;
                DeleteOutcome::Deleted(id)
            }
            Err(err) => {
                error!(post_id = id, error = %err, "failed to delete post");
                DeleteOutcome::Failed(id)
            }
        };

        self.delete = DeleteState::Idle;
        outcome
    }
}
