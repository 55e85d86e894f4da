use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    chat::{
        entities::ChatMessage,
        ports::{ChatRepository, ChatService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diagnostics::ports::MemoryProbe,
    journal::ports::JournalRepository,
    questionnaire::ports::{PredictionRepository, QuestionnaireResponseRepository},
    training::ports::{ArtifactStore, DatasetSource},
};

impl<QR, PR, JR, CR, AS, DS, MP> ChatService for Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    #[instrument(skip(self, payload))]
    async fn store_chat(&self, payload: Value) -> Result<ChatMessage, CoreError> {
        self.chat_repository
            .create_message(ChatMessage::new(payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::test_support::untrained_service, questionnaire::entities::FeatureSchema,
    };

    #[tokio::test]
    async fn test_payload_is_stored_verbatim() {
        let service = untrained_service(FeatureSchema::Standard);
        let payload = json!({"messages": [{"role": "user", "text": "hi"}], "session": 4});

        let message = service.store_chat(payload.clone()).await.unwrap();

        assert_eq!(message.payload, payload);
        assert_eq!(service.chat_repository.messages(), vec![message]);
    }
}
