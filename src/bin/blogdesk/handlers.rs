use blogdesk::application::admin::posts::{
    DeleteOutcome, PostFormController, PostListController, SubmitOutcome,
};
use blogdesk::cache::keys;
use blogdesk::config::{Command, PostStatusArg, StatusFilterArg};
use blogdesk::domain::entities::{Author, ListEnvelope};
use blogdesk::infra::api::{ApiClient, ApiError};
use reqwest::StatusCode;
use tracing::info;

use crate::error::CliError;
use crate::{print, prompt};

/// Field values for a create or edit. `None` keeps what the form already holds.
#[derive(Debug, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub status: Option<PostStatusArg>,
}

pub async fn dispatch(client: ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::List { status } => list(client, status).await,
        Command::Authors => authors(client).await,
        Command::Create {
            title,
            content,
            author,
            status,
        } => {
            let input = PostInput {
                title: Some(title),
                content: Some(content),
                author,
                status: Some(status),
            };
            create(client, input).await.map(|_| ())
        }
        Command::Edit {
            id,
            title,
            content,
            author,
            status,
        } => {
            let input = PostInput {
                title,
                content,
                author,
                status,
            };
            edit(client, id, input).await
        }
        Command::Delete { id, yes } => {
            let confirmed = yes || prompt::confirm(&format!("Delete post {id}?")).await?;
            delete(client, id, confirmed).await.map(|_| ())
        }
    }
}

pub async fn list(client: ApiClient, status: StatusFilterArg) -> Result<(), CliError> {
    let mut controller = PostListController::new(client);
    controller.set_filter(status.into());
    controller.load().await;
    print::posts(&controller.visible_posts());
    Ok(())
}

pub async fn authors(client: ApiClient) -> Result<(), CliError> {
    let body = client.get(keys::AUTHORS).await?;
    let authors: Vec<Author> = ListEnvelope::items(body).map_err(ApiError::from)?;
    print::authors(&authors);
    Ok(())
}

pub async fn create(client: ApiClient, input: PostInput) -> Result<SubmitOutcome, CliError> {
    let mut form = PostFormController::new(client, None);
    form.initialize().await;
    apply(&mut form, input);
    submit(&mut form).await
}

pub async fn edit(client: ApiClient, id: i64, input: PostInput) -> Result<(), CliError> {
    let mut form = PostFormController::new(client.clone(), Some(id));
    form.initialize().await;
    if !form.is_edit() {
        return Err(match form.post_load_error() {
            Some(err) if err.status() != Some(StatusCode::NOT_FOUND) => CliError::PostLoad {
                id,
                reason: err.to_string(),
            },
            _ => CliError::NotFound(id),
        });
    }
    apply(&mut form, input);

    // The load cached `blogs/{id}`; drop it so the PUT reaches the server.
    client.invalidate(&keys::blog(id));
    submit(&mut form).await.map(|_| ())
}

/// Request, then confirm or cancel, the deletion of `id`.
pub async fn delete(client: ApiClient, id: i64, confirmed: bool) -> Result<DeleteOutcome, CliError> {
    let mut controller = PostListController::new(client);
    controller.request_delete(id);
    if !confirmed {
        controller.cancel_delete();
        println!("cancelled");
        return Ok(DeleteOutcome::Skipped);
    }

    match controller.confirm_delete().await {
        DeleteOutcome::Failed(id) => Err(CliError::DeleteFailed(id)),
        outcome => {
            println!("deleted post {id}");
            Ok(outcome)
        }
    }
}

fn apply(form: &mut PostFormController, input: PostInput) {
    if let Some(title) = input.title {
        form.set_title(title);
    }
    if let Some(content) = input.content {
        form.set_content(content);
    }
    if let Some(author) = input.author {
        form.set_current_author(author);
    }
    if let Some(status) = input.status {
        form.set_status(status.into());
    }
}

async fn submit(form: &mut PostFormController) -> Result<SubmitOutcome, CliError> {
    match form.submit().await {
        SubmitOutcome::Rejected => {
            print::form_errors(form.errors());
            Err(CliError::Rejected)
        }
        outcome => {
            info!(?outcome, "post saved");
            println!("saved");
            Ok(outcome)
        }
    }
}
