use blogdesk::application::admin::posts::{
    AUTHOR_REQUIRED, DeleteOutcome, DeleteState, FormState, PostFormController,
    PostListController, Route, SAVE_FAILED, SubmitOutcome,
};
use blogdesk::domain::types::{PostStatus, StatusFilter};
use blogdesk::infra::api::ApiClient;
use blogdesk::util::text::truncate;
use httpmock::MockServer;
use serde_json::json;

const POSTS: &str = r#"{"data":[
    {"id":1,"title":"One","content":"first","author":"Ann","status":"published"},
    {"id":2,"title":"Two","content":"second","author":"Bo","status":"unpublished"},
    {"id":3,"title":"Three","content":"third","author":"Ann","status":"published"}
]}"#;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), "admin-test").expect("client")
}

async fn mock_authors(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method("GET").path("/authors");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[{"id":1,"name":"Ann"}]}"#);
        })
        .await;
}

#[tokio::test]
async fn list_loads_and_filters_in_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(200)
                .header("content-type", "application/json")
                .body(POSTS);
        })
        .await;

    let mut list = PostListController::new(client(&server));
    list.load().await;

    let all: Vec<_> = list
        .filtered_view(StatusFilter::All)
        .iter()
        .map(|post| post.title.as_str())
        .collect();
    assert_eq!(all, ["One", "Two", "Three"]);

    let published: Vec<_> = list
        .filtered_view(StatusFilter::Only(PostStatus::Published))
        .iter()
        .filter_map(|post| post.id)
        .collect();
    assert_eq!(published, [1, 3]);
    assert_eq!(list.posts().len(), 3);
}

#[tokio::test]
async fn list_load_failure_is_swallowed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(503).body("maintenance");
        })
        .await;

    let mut list = PostListController::new(client(&server));
    list.load().await;

    assert!(!list.is_loading());
    assert!(list.posts().is_empty());
}

#[test]
fn preview_truncation() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("0123456789X", 10), "0123456789...");
}

#[tokio::test]
async fn confirm_delete_without_request_sends_nothing() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method("DELETE");
            then.status(204);
        })
        .await;

    let mut list = PostListController::new(client(&server));
    assert_eq!(list.confirm_delete().await, DeleteOutcome::Skipped);
    assert_eq!(list.delete_state(), DeleteState::Idle);
    assert_eq!(delete.calls_async().await, 0);
}

#[tokio::test]
async fn delete_success_reloads_from_network() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(200)
                .header("content-type", "application/json")
                .body(POSTS);
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method("DELETE").path("/blogs/2").header("x-key", "admin-test");
            then.status(204);
        })
        .await;

    let mut list = PostListController::new(client(&server));
    list.load().await;
    list.load().await;
    assert_eq!(listing.calls_async().await, 1);

    list.request_delete(2);
    assert_eq!(list.pending_delete(), Some(2));
    assert_eq!(list.confirm_delete().await, DeleteOutcome::Deleted(2));

    delete.assert_async().await;
    assert_eq!(listing.calls_async().await, 2);
    assert_eq!(list.delete_state(), DeleteState::Idle);
}

#[tokio::test]
async fn delete_failure_returns_to_idle() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("DELETE").path("/blogs/2");
            then.status(500).body("boom");
        })
        .await;
    let listing = server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(200).body(POSTS);
        })
        .await;

    let mut list = PostListController::new(client(&server));
    list.request_delete(2);
    assert_eq!(list.confirm_delete().await, DeleteOutcome::Failed(2));
    assert_eq!(list.delete_state(), DeleteState::Idle);
    assert_eq!(listing.calls_async().await, 0);
}

#[tokio::test]
async fn submit_resolves_author_by_name() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method("POST").path("/blogs").json_body(json!({
                "title": "Hello",
                "content": "World",
                "author_id": 1,
                "status": "unpublished"
            }));
            then.status(201).body(r#"{"id":10}"#);
        })
        .await;

    let mut form = PostFormController::new(client(&server), None);
    form.initialize().await;
    assert_eq!(form.state(), FormState::Ready);
    assert_eq!(form.draft().author.id, 0);

    form.set_title("Hello");
    form.set_content("World");
    form.set_current_author("Ann");
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Navigate(Route::Home));
    assert_eq!(form.state(), FormState::Submitted);
    assert!(form.errors().is_empty());
    create.assert_async().await;
}

#[tokio::test]
async fn submit_without_author_never_reaches_network() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method("POST").path("/blogs");
            then.status(201);
        })
        .await;

    let mut form = PostFormController::new(client(&server), None);
    form.initialize().await;
    form.set_title("Hello");
    form.set_current_author("Nobody");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(form.errors(), [AUTHOR_REQUIRED]);
    assert_eq!(form.state(), FormState::Ready);
    assert_eq!(create.calls_async().await, 0);
}

#[tokio::test]
async fn validation_errors_replace_error_list() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/blogs");
            then.status(422)
                .header("content-type", "application/json")
                .body(r#"{"errors":["Title is required.","Content is required."]}"#);
        })
        .await;

    let mut form = PostFormController::new(client(&server), None);
    form.initialize().await;
    assert!(form.select_author(1));

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(form.errors(), ["Title is required.", "Content is required."]);
}

#[tokio::test]
async fn unstructured_failure_pushes_generic_message() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/blogs");
            then.status(500).body("internal error");
        })
        .await;

    let mut form = PostFormController::new(client(&server), None);
    form.initialize().await;
    form.set_current_author("Ann");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(form.errors(), [SAVE_FAILED]);
}

#[tokio::test]
async fn submit_always_invalidates_list() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    let listing = server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(200).body(POSTS);
        })
        .await;

    let client = client(&server);
    let mut list = PostListController::new(client.clone());
    list.load().await;

    let mut form = PostFormController::new(client, None);
    form.initialize().await;
    assert_eq!(form.submit().await, SubmitOutcome::Rejected);

    list.load().await;
    assert_eq!(listing.calls_async().await, 2);
}

#[tokio::test]
async fn edit_mode_puts_to_loaded_post() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs/4");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"id":4,"title":"Draft","content":"Body","author":"Ann","author_id":1,"status":"unpublished"}"#);
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method("PUT").path("/blogs/4").json_body(json!({
                "title": "Draft",
                "content": "Body",
                "author_id": 1,
                "status": "published"
            }));
            then.status(200).body(r#"{"id":4}"#);
        })
        .await;

    let client = client(&server);
    let mut form = PostFormController::new(client.clone(), Some(4));
    form.initialize().await;
    assert!(form.is_edit());
    assert_eq!(form.current_author(), "Ann");

    form.set_status(PostStatus::Published);
    client.invalidate("blogs/4");
    assert_eq!(form.submit().await, SubmitOutcome::Navigate(Route::Home));
    update.assert_async().await;
}

#[tokio::test]
async fn null_valued_post_still_edits_in_place() {
    let server = MockServer::start_async().await;
    mock_authors(&server).await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs/6");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"id":6,"title":"Kept","content":null,"author":"Ann","author_id":1,"status":null}"#);
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method("PUT").path("/blogs/6").json_body(json!({
                "title": "Kept",
                "content": "",
                "author_id": 1,
                "status": "unpublished"
            }));
            then.status(200).body(r#"{"id":6}"#);
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method("POST").path("/blogs");
            then.status(201);
        })
        .await;

    let client = client(&server);
    let mut form = PostFormController::new(client.clone(), Some(6));
    form.initialize().await;
    assert!(form.is_edit());

    client.invalidate("blogs/6");
    assert_eq!(form.submit().await, SubmitOutcome::Navigate(Route::Home));
    update.assert_async().await;
    assert_eq!(create.calls_async().await, 0);
}

#[tokio::test]
async fn list_tolerates_null_and_unknown_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/blogs");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[
                    {"id":1,"title":"One","status":"published"},
                    {"id":2,"title":null,"content":null,"status":"scheduled"}
                ]}"#);
        })
        .await;

    let mut list = PostListController::new(client(&server));
    list.load().await;

    assert_eq!(list.posts().len(), 2);
    let unpublished: Vec<_> = list
        .filtered_view(StatusFilter::Only(PostStatus::Unpublished))
        .iter()
        .filter_map(|post| post.id)
        .collect();
    assert_eq!(unpublished, [2]);
}
