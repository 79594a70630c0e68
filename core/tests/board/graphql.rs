// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The board driving the GraphQL gateway against a mock server.

use potluck_core::{Board, Category, EntryId};
use potluck_graphql::{AuthMethod, GraphQlClient, GraphQlConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_draft;

fn client(server: &MockServer) -> GraphQlClient {
    let config = GraphQlConfig {
        endpoint: format!("{}/graphql", server.uri()),
        auth: AuthMethod::ApiKey {
            key: "da2-test".to_string(),
        },
        ..Default::default()
    };
    GraphQlClient::new(config).expect("Failed to create client")
}

async fn mount_list(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"operationName": "ListNotes"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"listNotes": {"items": items, "nextToken": null}}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_sends_draft_and_reloads_into_group() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "CreateNote",
            "variables": {"input": {"name": "Ana", "description": "Soda", "type": "drink"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "createNote": {"id": "7", "name": "Ana", "description": "Soda", "type": "drink"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        json!([{"id": "7", "name": "Ana", "description": "Soda", "type": "drink"}]),
    )
    .await;
    let mut board = Board::new(client(&server));
    board.open_add_form();

    // Act
    let draft = test_draft("Ana", "Soda", Some(Category::Drink));
    board.create(&draft).await.unwrap();

    // Assert
    assert!(!board.is_add_form_open());
    assert!(!board.is_loading());
    let [dish, dessert, drink] = board.groups();
    assert!(dish.entries.is_empty());
    assert!(dessert.entries.is_empty());
    assert_eq!(drink.entries.len(), 1);
    assert_eq!(drink.entries[0].id, Some(EntryId::from("7")));
    assert_eq!(drink.entries[0].name, "Ana");
}

#[tokio::test]
async fn dessert_is_written_as_desert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "CreateNote",
            "variables": {"input": {"type": "desert"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "createNote": {"id": "1", "name": "Sam", "description": "Pie", "type": "desert"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        json!([{"id": "1", "name": "Sam", "description": "Pie", "type": "desert"}]),
    )
    .await;
    let mut board = Board::new(client(&server));

    let draft = test_draft("Sam", "Pie", Some(Category::Dessert));
    board.create(&draft).await.unwrap();

    let [_, dessert, _] = board.groups();
    assert_eq!(dessert.entries.len(), 1);
    assert_eq!(dessert.entries[0].name, "Sam");
}

#[tokio::test]
async fn update_and_delete_send_the_entry_id() {
    // Arrange
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([
            {"id": "1", "name": "Sam", "description": "Pie", "type": "desert"},
            {"id": "2", "name": "Lee", "description": "Lasagna", "type": "dish"}
        ]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "UpdateNote",
            "variables": {"input": {"id": "1", "description": "Apple pie"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "updateNote": {"id": "1", "name": "Sam", "description": "Apple pie", "type": "desert"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "DeleteNote",
            "variables": {"input": {"id": "2"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "deleteNote": {"id": "2", "name": "Lee", "description": "Lasagna", "type": "dish"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut board = Board::new(client(&server));
    board.load().await.unwrap();

    // Act
    board.begin_edit(&EntryId::from("1")).unwrap();
    board.update("Apple pie").await.unwrap();
    board.delete(&EntryId::from("2")).await.unwrap();

    // Assert: the mock expectations are checked when the server drops
    assert!(board.editing().is_none());
    assert!(board.entries().iter().all(|a| a.id != Some(EntryId::from("2"))));
}
