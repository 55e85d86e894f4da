mod common;

use axum::http::StatusCode;
use common::{ApiContext, empty_db, journal_row};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_exhausted_entry_has_high_stress(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![journal_row("stored")]])
        .into_connection();
    let server = ctx.server(db);

    let response = server
        .post("/journal-analyze")
        .json(&json!({ "journalContent": "Work left me exhausted again" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["stressLevel"], "High");
    assert!(body["stressSolution"]
        .as_str()
        .unwrap()
        .starts_with("You seem to be under a lot of stress"));
    assert_eq!(body["mood"], "Neutral");
    assert!(body["createdAt"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_empty_entry_is_rejected(ctx: &mut ApiContext) {
    let server = ctx.server(empty_db());

    for content in ["", "   "] {
        let response = server
            .post("/journal-analyze")
            .json(&json!({ "journalContent": content }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = server.post("/journal-analyze").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_predict_journal_scores_without_storing(ctx: &mut ApiContext) {
    // An empty mock would fail any query, so success proves nothing is written.
    let server = ctx.server(empty_db());

    let response = server
        .post("/predict_journal")
        .json(&json!({ "content": "Deadline pressure, I can't stop to worry" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "stress": "High", "anxiety": "Moderate", "depression": "Low" })
    );

    let response = server.post("/predict_journal").json(&json!({})).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "stress": "Low", "anxiety": "Low", "depression": "Low" })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_journal_listing(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![journal_row("newer"), journal_row("older")]])
        .into_connection();
    let server = ctx.server(db);

    let response = server.get("/journal").add_query_param("limit", 2).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body[0]["text"], "newer");
    assert_eq!(body.as_array().unwrap().len(), 2);
}
