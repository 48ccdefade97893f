//! Integration tests for todo routes.

use axum::http::StatusCode;

use crate::common::{add_todo, count, create_list, TestApp};

#[tokio::test]
async fn test_groceries_scenario() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Groceries").await;

    let added = client.post("/lists/0/todos", &[("todo", "Milk")]).await;
    assert_eq!(added.location.as_deref(), Some("/lists/0"));
    let page = client.follow(&added).await;
    assert!(page.body.contains("The todo was added."));
    assert!(page.body.contains("<span class=\"name\">Milk</span>"));
    assert!(page.body.contains("1 / 1 remaining"));

    let toggled = client
        .post("/lists/0/todos/0", &[("completed", "true")])
        .await;
    assert_eq!(toggled.location.as_deref(), Some("/lists/0"));
    let page = client.follow(&toggled).await;
    assert!(page.body.contains("The todo was marked completed."));
    assert!(page.body.contains("0 / 1 remaining"));
    assert!(page.body.contains("<section id=\"todos\" class=\"complete\">"));

    let overview = client.get("/lists").await;
    assert!(overview
        .body
        .contains("<li class=\"complete\"><a href=\"/lists/0\"><h3>Groceries</h3><p>0 / 1</p>"));
}

#[tokio::test]
async fn test_toggle_back_to_uncompleted() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "Sweep").await;
    client
        .post("/lists/0/todos/0", &[("completed", "true")])
        .await;

    let response = client
        .post("/lists/0/todos/0", &[("completed", "false")])
        .await;
    let page = client.follow(&response).await;

    assert!(page.body.contains("The todo was marked uncompleted."));
    assert!(page.body.contains("1 / 1 remaining"));
}

#[tokio::test]
async fn test_malformed_completed_flag_rejected() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "Sweep").await;

    let response = client
        .post("/lists/0/todos/0", &[("completed", "yes")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let page = client.get("/lists/0").await;
    assert!(page.body.contains("1 / 1 remaining"));
}

#[tokio::test]
async fn test_missing_todo_field_is_bad_request() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;

    let response = client.post("/lists/0/todos", &[("text", "Sweep")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(response.body.contains("Invalid form submission"));
    let page = client.get("/lists/0").await;
    assert!(page.body.contains("0 / 0 remaining"));
}

#[tokio::test]
async fn test_toggle_without_completed_is_bad_request() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "Sweep").await;

    let response = client.post("/lists/0/todos/0", &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(response.body.contains("completed"));
    let page = client.get("/lists/0").await;
    assert!(page.body.contains("1 / 1 remaining"));
}

#[tokio::test]
async fn test_empty_todo_rejected() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "Sweep").await;

    let response = client.post("/lists/0/todos", &[("todo", "  ")]).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response
        .body
        .contains("Todo must be between 1 and 200 characters."));
    assert!(response.body.contains("<h2>Chores</h2>"));
    assert_eq!(count(&response.body, "<span class=\"name\">"), 1);
}

#[tokio::test]
async fn test_delete_todo_renders_list() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "Sweep").await;
    add_todo(&mut client, 0, "Mop").await;

    let response = client.post("/lists/0/todos/0/delete", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("The todo was deleted."));
    assert!(!response.body.contains(">Sweep<"));
    assert!(response.body.contains("<span class=\"name\">Mop</span>"));
    // the remaining todo now sits at position 0
    assert!(response.body.contains("action=\"/lists/0/todos/0/delete\""));
    assert!(!response.body.contains("action=\"/lists/0/todos/1/delete\""));
}

#[tokio::test]
async fn test_todo_index_out_of_range_is_not_found() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;

    let delete = client.post("/lists/0/todos/0/delete", &[]).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let toggle = client
        .post("/lists/0/todos/5", &[("completed", "true")])
        .await;
    assert_eq!(toggle.status, StatusCode::NOT_FOUND);

    let missing_list = client.post("/lists/4/todos", &[("todo", "Sweep")]).await;
    assert_eq!(missing_list.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_complete_all() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    for name in ["Sweep", "Mop", "Dust"] {
        add_todo(&mut client, 0, name).await;
    }

    let response = client.post("/lists/0/complete_all", &[]).await;
    assert_eq!(response.location.as_deref(), Some("/lists/0"));

    let page = client.follow(&response).await;
    assert!(page.body.contains("All todos marked complete."));
    assert!(page.body.contains("0 / 3 remaining"));
    assert_eq!(count(&page.body, "<li class=\"complete\">"), 3);
}

#[tokio::test]
async fn test_complete_all_on_empty_list_stays_incomplete() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Empty").await;

    client.post("/lists/0/complete_all", &[]).await;

    let overview = client.get("/lists").await;
    assert!(overview.body.contains("<li><a href=\"/lists/0\"><h3>Empty</h3><p>0 / 0</p>"));
}

#[tokio::test]
async fn test_todo_text_is_escaped() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Chores").await;
    add_todo(&mut client, 0, "<b>bold</b> & more").await;

    let page = client.get("/lists/0").await;

    assert!(page
        .body
        .contains("<span class=\"name\">&lt;b&gt;bold&lt;/b&gt; &amp; more</span>"));
}
