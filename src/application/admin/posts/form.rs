//! Create/edit form for a single post.

use reqwest::Method;
use tracing::{error, info, instrument, warn};

use crate::cache::keys;
use crate::domain::{
    entities::{Author, ListEnvelope, Post, PostPayload},
    types::PostStatus,
};
use crate::infra::api::{ApiClient, ApiError, RequestOptions};

use super::types::{AUTHOR_REQUIRED, FormState, PostDraft, Route, SAVE_FAILED, SubmitOutcome};

pub struct PostFormController {
    client: ApiClient,
    route_id: Option<i64>,
    post: Option<Post>,
    draft: PostDraft,
    /// Display name of the loaded post's author; also the first choice when
    /// resolving which author id to submit.
    current_author: String,
    authors: Vec<Author>,
    /// Why the route's post could not be loaded, if it failed.
    post_error: Option<ApiError>,
    errors: Vec<String>,
    state: FormState,
}

impl PostFormController {
    /// A form for `route_id`, or a blank create form when `None`.
    pub fn new(client: ApiClient, route_id: Option<i64>) -> Self {
        Self {
            client,
            route_id,
            post: None,
            draft: PostDraft::default(),
            current_author: String::new(),
            authors: Vec::new(),
            post_error: None,
            errors: Vec::new(),
            state: FormState::Initializing,
        }
    }

    /// Load the post (edit mode) and the author list concurrently, then
    /// become `Ready`. Either load may fail; the failure is logged and the
    /// matching state stays blank.
    #[instrument(skip_all)]
    pub async fn initialize(&mut self) {
        self.state = FormState::Initializing;

        let (post, authors) = tokio::join!(
            fetch_post(&self.client, self.route_id),
            fetch_authors(&self.client)
        );

        self.post_error = None;
        let post = match post {
            Ok(post) => post,
            Err(err) => {
                error!(error = %err, "failed to load post");
                self.post_error = Some(err);
                None
            }
        };
        match authors {
            Ok(authors) => self.authors = authors,
            Err(err) => error!(error = %err, "failed to load authors"),
        }

        self.replace_post(post);
        self.state = FormState::Ready;
    }

    /// Swap the loaded post. The draft and current author are always rebuilt
    /// from scratch; no edits survive a replacement.
    pub fn replace_post(&mut self, post: Option<Post>) {
        match &post {
            Some(post) => {
                self.draft = PostDraft::from_post(post);
                self.current_author = post.author.clone().unwrap_or_default();
            }
            None => {
                self.draft = PostDraft::default();
                self.current_author.clear();
            }
        }
        self.post = post;
    }

    /// Set when `initialize` could not load the route's post. `None` with no
    /// post means the API had nothing for that id.
    pub fn post_load_error(&self) -> Option<&ApiError> {
        self.post_error.as_ref()
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn current_author(&self) -> &str {
        &self.current_author
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Edit mode is decided by the loaded post, not by the route.
    pub fn is_edit(&self) -> bool {
        self.editing_id().is_some()
    }

    fn editing_id(&self) -> Option<i64> {
        self.post.as_ref().and_then(|post| post.id)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.draft.status = status;
    }

    pub fn set_current_author(&mut self, name: impl Into<String>) {
        self.current_author = name.into();
    }

    /// Point the draft at a loaded author. Returns `false` for an unknown id.
    pub fn select_author(&mut self, id: i64) -> bool {
        match self.authors.iter().find(|author| author.id == id) {
            Some(author) => {
                self.draft.author = author.clone();
                true
            }
            None => false,
        }
    }

    /// Author id to submit: a name match for `current_author` in the loaded
    /// list wins, otherwise the draft's own author id.
    pub fn resolve_author_id(&self) -> i64 {
        self.authors
            .iter()
            .find(|author| author.name == self.current_author)
            .map(|author| author.id)
            .unwrap_or(self.draft.author.id)
    }

    /// Validate and save the draft.
    ///
    /// Whatever happens, `blogs` is invalidated and the form leaves
    /// `Submitting`. On rejection `errors()` lists the reasons.
    #[instrument(skip_all)]
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.errors.clear();
        self.state = FormState::Submitting;

        let outcome = self.save().await;

        self.client.invalidate(keys::BLOGS);
        self.state = match outcome {
            SubmitOutcome::Navigate(_) => FormState::Submitted,
            SubmitOutcome::Rejected => FormState::Ready,
        };
        outcome
    }

    async fn save(&mut self) -> SubmitOutcome {
        let author_id = self.resolve_author_id();
        if author_id == 0 {
            warn!("submission rejected: no author selected");
            self.errors.push(AUTHOR_REQUIRED.to_string());
            return SubmitOutcome::Rejected;
        }

        let payload = PostPayload {
            title: self.draft.title.clone(),
            content: self.draft.content.clone(),
            author_id,
            status: self.draft.status,
        };

        match self.send(&payload).await {
            Ok(()) => {
                info!(author_id, "post saved");
                SubmitOutcome::Navigate(Route::Home)
            }
            Err(err) => {
                error!(error = %err, "failed to save post");
                match err.validation_errors() {
                    Some(messages) => self.errors = messages.to_vec(),
                    None => self.errors.push(SAVE_FAILED.to_string()),
                }
                SubmitOutcome::Rejected
            }
        }
    }

    async fn send(&self, payload: &PostPayload) -> Result<(), ApiError> {
        let (endpoint, method) = match self.editing_id() {
            Some(id) => (keys::blog(id), Method::PUT),
            None => (keys::BLOGS.to_string(), Method::POST),
        };
        let options = RequestOptions::new(method).json(payload)?;
        self.client.fetch(&endpoint, options).await?;
        Ok(())
    }
}

async fn fetch_post(client: &ApiClient, id: Option<i64>) -> Result<Option<Post>, ApiError> {
    let Some(id) = id else {
        return Ok(None);
    };
    let body = client.get(&keys::blog(id)).await?;
    if body.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(body)?))
}

async fn fetch_authors(client: &ApiClient) -> Result<Vec<Author>, ApiError> {
    let body = client.get(keys::AUTHORS).await?;
    Ok(ListEnvelope::items(body)?)
}
