use crate::domain::{
    common::entities::app_errors::CoreError,
    journal::entities::{JournalAnalysis, JournalRiskLevels},
};

#[cfg_attr(test, mockall::automock)]
pub trait JournalService: Send + Sync {
    /// Tags the entry, attaches advice and stores the result.
    fn analyze_journal(
        &self,
        content: String,
    ) -> impl Future<Output = Result<JournalAnalysis, CoreError>> + Send;

    /// Quick tagging without persistence.
    fn tag_journal(&self, content: String) -> Result<JournalRiskLevels, CoreError>;

    fn get_journal_entries(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<JournalAnalysis>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait JournalRepository: Send + Sync {
    fn create_entry(
        &self,
        analysis: JournalAnalysis,
    ) -> impl Future<Output = Result<JournalAnalysis, CoreError>> + Send;

    /// Newest first.
    fn fetch_entries(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<JournalAnalysis>, CoreError>> + Send;
}
