use axum::extract::{Path, State};
use mindscope_core::domain::questionnaire::{
    entities::PredictionRecord, ports::QuestionnaireService,
};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/get_predictions/{user_id}",
    tag = "questionnaire",
    summary = "List a user's predictions",
    description = "Returns every stored prediction for the user, oldest first. Unknown users get an empty list.",
    params(
        ("user_id" = String, Path, description = "User identifier sent with the questionnaire"),
    ),
    responses(
        (status = 200, body = Vec<PredictionRecord>)
    ),
)]
pub async fn get_predictions(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<PredictionRecord>>, ApiError> {
    let records = state
        .service
        .get_predictions(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(records))
}
