use utoipa::OpenApi;

use crate::application::http::{
    chat::router::ChatApiDoc, diagnostics::router::DiagnosticsApiDoc,
    journal::router::JournalApiDoc, questionnaire::router::QuestionnaireApiDoc,
    training::router::TrainingApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MindScope API"
    ),
    tags(
        (name = "questionnaire", description = "Questionnaire submission and risk prediction"),
        (name = "journal", description = "Keyword-based journal tagging"),
        (name = "chat", description = "Chat transcript storage"),
        (name = "training", description = "Classifier retraining"),
        (name = "diagnostics", description = "Process diagnostics"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every feature's routes, unprefixed.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(QuestionnaireApiDoc::openapi());
        doc.merge(JournalApiDoc::openapi());
        doc.merge(ChatApiDoc::openapi());
        doc.merge(TrainingApiDoc::openapi());
        doc.merge(DiagnosticsApiDoc::openapi());
        doc
    }
}
