mod common;

use common::TestApp;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn transaction_routes_require_authentication() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/transactions").send().await.unwrap();
    assert_eq!(response.status(), 401);

    let response = app
        .post("/api/v1/transactions")
        .json(&json!({ "amount": 10.0, "description": "lunch", "type": "expense" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn create_get_update_delete_transaction() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("Ann", "ann@x.com").await;

    let response = app
        .post_authenticated("/api/v1/transactions", &token)
        .json(&json!({ "amount": 2500.0, "description": "salary", "type": "income" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["amount"], 2500.0);
    assert_eq!(created["description"], "salary");
    assert_eq!(created["type"], "income");
    assert_eq!(created["created_at"], created["updated_at"]);

    let path = format!("/api/v1/transactions/{}", id);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({ "amount": 42.5, "description": "groceries", "type": "expense" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["amount"], 42.5);
    assert_eq!(updated["type"], "expense");
    assert_eq!(updated["created_at"], created["created_at"]);

    let response = app.delete_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), 204);

    let response = app.get_authenticated(&path, &token).send().await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("Ann", "ann@x.com").await;

    for description in ["first", "second", "third"] {
        let response = app
            .post_authenticated("/api/v1/transactions", &token)
            .json(&json!({ "amount": 1.0, "description": description, "type": "expense" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = app
        .get_authenticated("/api/v1/transactions", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let list: Vec<Value> = response.json().await.unwrap();
    let descriptions: Vec<&str> = list
        .iter()
        .map(|t| t["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn transactions_are_private_to_their_owner() {
    let app = TestApp::spawn().await;
    let ann = app.register_and_login("Ann", "ann@x.com").await;
    let bob = app.register_and_login("Bob", "bob@x.com").await;

    let created: Value = app
        .post_authenticated("/api/v1/transactions", &ann)
        .json(&json!({ "amount": 10.0, "description": "lunch", "type": "expense" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let path = format!("/api/v1/transactions/{}", created["id"]);

    let response = app.get_authenticated(&path, &bob).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let response = app
        .put_authenticated(&path, &bob)
        .json(&json!({ "amount": 1.0, "description": "mine now", "type": "income" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = app.delete_authenticated(&path, &bob).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let list: Vec<Value> = app
        .get_authenticated("/api/v1/transactions", &bob)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());

    let response = app.get_authenticated(&path, &ann).send().await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn invalid_transactions_are_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("Ann", "ann@x.com").await;

    let cases = [
        json!({ "amount": 0.0, "description": "zero", "type": "expense" }),
        json!({ "amount": -5.0, "description": "negative", "type": "expense" }),
        json!({ "amount": 5.0, "description": "transfer", "type": "transfer" }),
        json!({ "amount": "five", "description": "text", "type": "income" }),
        json!({ "description": "no amount", "type": "income" }),
    ];

    for case in cases {
        let response = app
            .post_authenticated("/api/v1/transactions", &token)
            .json(&case)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "body {}", case);
    }

    let response = app
        .get_authenticated("/api/v1/transactions/not-a-number", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .get_authenticated("/api/v1/transactions/999", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
