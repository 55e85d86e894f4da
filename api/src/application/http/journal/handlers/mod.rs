pub mod analyze_journal;
pub mod get_journal_entries;
pub mod predict_journal;
