pub mod entities;
pub mod lexicon;
pub mod ports;
pub mod services;
pub mod tagger;

pub use entities::*;
pub use lexicon::*;
pub use ports::*;
pub use tagger::{JournalTagger, QuickJournalTagger};
