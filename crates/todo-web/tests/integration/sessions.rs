//! Integration tests for session transport.

use axum::http::StatusCode;

use crate::common::{add_todo, create_list, TestApp, COOKIE};

#[tokio::test]
async fn test_first_visit_issues_cookie_once() {
    let app = TestApp::new();
    let mut client = app.client();

    let first = client.get("/lists").await;
    let set_cookie = first.set_cookie.expect("first visit sets a cookie");
    assert!(set_cookie.starts_with(&format!("{COOKIE}=")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(client.cookie().is_some());

    let second = client.get("/lists").await;
    assert!(second.set_cookie.is_none());
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_clients_do_not_share_lists() {
    let app = TestApp::new();
    let mut alice = app.client();
    let mut bob = app.client();

    create_list(&mut alice, "Alice's list").await;
    let bobs_view = bob.get("/lists").await;

    assert!(bobs_view.body.contains("You have no lists yet."));
    assert_eq!(bob.get("/lists/0").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_lost_cookie_starts_fresh_session() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Groceries").await;

    client.clear_cookie();
    let response = client.get("/lists").await;

    assert!(response.set_cookie.is_some());
    assert!(response.body.contains("You have no lists yet."));
}

#[tokio::test]
async fn test_unknown_or_malformed_cookie_is_replaced() {
    let app = TestApp::new();
    let mut owner = app.client();
    create_list(&mut owner, "Groceries").await;

    for forged in [
        format!("{COOKIE}=00000000-0000-4000-8000-000000000000"),
        format!("{COOKIE}=not-a-session"),
    ] {
        let mut stranger = app.client();
        stranger.set_cookie(forged.clone());

        let response = stranger.get("/lists").await;

        assert!(response.set_cookie.is_some(), "{forged}");
        assert_ne!(stranger.cookie(), Some(forged.as_str()));
        assert_ne!(stranger.cookie(), owner.cookie());
        assert!(response.body.contains("You have no lists yet."));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_in_one_session_are_not_lost() {
    let app = TestApp::new();
    let mut client = app.client();
    create_list(&mut client, "Busy").await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let mut worker = client.clone();
        handles.push(tokio::spawn(async move {
            add_todo(&mut worker, 0, &format!("task {i}")).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let page = client.get("/lists/0").await;
    assert!(page.body.contains("20 / 20 remaining"));
}
