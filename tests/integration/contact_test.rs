//! Integration tests for contact CRUD and ownership isolation.

use http::StatusCode;

use crate::helpers::{self, unique_email};

#[tokio::test]
async fn test_contacts_require_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/contacts", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_new_user_has_empty_list() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-empty"), "password123")
        .await;

    let response = app.request("GET", "/api/contacts", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_contact_stamps_owner() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-stamp"), "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/contacts",
            Some(serde_json::json!({
                "name": "Charlie",
                "email": "charlie@example.com",
                "phone": "555-0100",
                // An owner_id in the body must be ignored
                "owner_id": "00000000-0000-0000-0000-000000000000",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body.get("name").unwrap().as_str().unwrap(),
        "Charlie"
    );
    assert_eq!(
        response.body.get("kind").unwrap().as_str().unwrap(),
        "personal"
    );
    assert_ne!(
        response.body.get("owner_id").unwrap().as_str().unwrap(),
        "00000000-0000-0000-0000-000000000000"
    );
}

#[tokio::test]
async fn test_users_only_see_their_own_contacts() {
    let app = helpers::TestApp::new().await;
    let alice = app
        .register("Alice", &unique_email("alice-iso"), "password123")
        .await;
    let bob = app
        .register("Bob", &unique_email("bob-iso"), "password123")
        .await;

    app.create_contact(&alice, "Alice's friend").await;
    app.create_contact(&bob, "Bob's colleague").await;

    let alice_list = app.request("GET", "/api/contacts", None, Some(&alice)).await;
    let bob_list = app.request("GET", "/api/contacts", None, Some(&bob)).await;

    let alice_contacts = alice_list.body.as_array().unwrap();
    let bob_contacts = bob_list.body.as_array().unwrap();

    assert_eq!(alice_contacts.len(), 1);
    assert_eq!(bob_contacts.len(), 1);
    assert_eq!(
        alice_contacts[0].get("name").unwrap().as_str().unwrap(),
        "Alice's friend"
    );
    assert_eq!(
        bob_contacts[0].get("name").unwrap().as_str().unwrap(),
        "Bob's colleague"
    );
}

#[tokio::test]
async fn test_cross_user_access_is_forbidden() {
    let app = helpers::TestApp::new().await;
    let alice = app
        .register("Alice", &unique_email("alice-cross"), "password123")
        .await;
    let bob = app
        .register("Bob", &unique_email("bob-cross"), "password123")
        .await;

    let contact_id = app.create_contact(&alice, "Alice's secret contact").await;

    // Bob cannot read, update, or delete Alice's contact
    let read = app
        .request(
            "GET",
            &format!("/api/contacts/{}", contact_id),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(read.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            "PUT",
            &format!("/api/contacts/{}", contact_id),
            Some(serde_json::json!({ "name": "Hijacked" })),
            Some(&bob),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/contacts/{}", contact_id),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    // The contact is untouched
    let read_back = app
        .request(
            "GET",
            &format!("/api/contacts/{}", contact_id),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(read_back.status, StatusCode::OK);
    assert_eq!(
        read_back.body.get("name").unwrap().as_str().unwrap(),
        "Alice's secret contact"
    );
}

#[tokio::test]
async fn test_missing_contact_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-404"), "password123")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/contacts/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_contact_merges_fields() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-update"), "password123")
        .await;

    let contact_id = app.create_contact(&token, "Dana").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/contacts/{}", contact_id),
            Some(serde_json::json!({
                "phone": "555-0199",
                "kind": "professional",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    // Name is untouched, phone and kind updated
    assert_eq!(response.body.get("name").unwrap().as_str().unwrap(), "Dana");
    assert_eq!(
        response.body.get("phone").unwrap().as_str().unwrap(),
        "555-0199"
    );
    assert_eq!(
        response.body.get("kind").unwrap().as_str().unwrap(),
        "professional"
    );
}

#[tokio::test]
async fn test_delete_contact() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", &unique_email("alice-delete"), "password123")
        .await;

    let contact_id = app.create_contact(&token, "Ephemeral").await;

    let delete = app
        .request(
            "DELETE",
            &format!("/api/contacts/{}", contact_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    let read_back = app
        .request(
            "GET",
            &format!("/api/contacts/{}", contact_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(read_back.status, StatusCode::NOT_FOUND);
}
