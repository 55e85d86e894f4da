mod common;

use axum::http::StatusCode;
use common::{ApiContext, empty_db, prediction_row, standard_answers, submission_db};
use mindscope_core::domain::questionnaire::entities::FeatureSchema;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_submit_returns_single_label(ctx: &mut ApiContext) {
    ctx.train();
    let server = ctx.server(submission_db());

    let response = server.post("/submit").json(&standard_answers()).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let prediction = body["prediction"].as_array().unwrap();
    assert_eq!(prediction.len(), 1);
    assert!(["Low", "Moderate", "High"].contains(&prediction[0].as_str().unwrap()));
    assert!(body.get("suggestion").is_none());
    assert_eq!(body["model_version"], 1);
    assert!(body["submission_id"].is_string());

    let screening = &body["screening"];
    assert_eq!(screening["anxietyScore"], 3);
    assert_eq!(screening["anxietyLevel"], "Moderate");
    assert_eq!(screening["stressLevel"], "Low");
    assert!(screening["depressionSolution"].as_str().unwrap().starts_with("You're doing well"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_submit_missing_field_is_rejected_before_prediction(ctx: &mut ApiContext) {
    ctx.train();
    let server = ctx.server(empty_db());

    for field in ["mood", "feelingWorthy", "panicAttacks"] {
        let mut answers = standard_answers();
        answers.as_object_mut().unwrap().remove(field);

        let response = server.post("/submit").json(&answers).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["code"], "missing_fields");
        assert!(body["error"].as_str().unwrap().contains(field));
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_submit_without_model_is_unavailable(ctx: &mut ApiContext) {
    let server = ctx.server(empty_db());

    let response = server.post("/submit").json(&standard_answers()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "model_unavailable");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_submit_rejects_non_object_body(ctx: &mut ApiContext) {
    let server = ctx.server(empty_db());

    let response = server.post("/submit").json(&json!(["Low", "High"])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "bad_request");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_storage_failure_is_reported_as_persistence_failed(ctx: &mut ApiContext) {
    ctx.train();
    // No query results queued: the first insert fails.
    let server = ctx.server(empty_db());

    let response = server.post("/submit").json(&standard_answers()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "persistence_failed");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_extended_schema_returns_suggestion(ctx: &mut ApiContext) {
    ctx.extended = true;
    ctx.write_dataset(FeatureSchema::Extended);
    ctx.train();
    let server = ctx.server(submission_db());

    let mut answers = standard_answers();
    let object = answers.as_object_mut().unwrap();
    object.insert("stress".to_string(), json!("Normal"));
    object.insert("anxiety".to_string(), json!("Normal"));

    let response = server.post("/submit").json(&answers).await;

    response.assert_status_ok();
    let suggestion = response.json::<Value>()["suggestion"].as_str().unwrap().to_string();
    assert_ne!(suggestion, "No solution available.");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_get_predictions_for_unknown_user_is_empty(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<mindscope_core::entity::predictions::Model>::new()])
        .into_connection();
    let server = ctx.server(db);

    let response = server.get("/get_predictions/nobody").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_get_predictions_lists_stored_records(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            prediction_row("patient-1", "High"),
            prediction_row("patient-1", "Low"),
        ]])
        .into_connection();
    let server = ctx.server(db);

    let response = server.get("/get_predictions/patient-1").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["prediction"], json!(["High"]));
    assert_eq!(records[1]["user_id"], "patient-1");
}
