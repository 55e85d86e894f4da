pub mod fallback;
pub mod feature_encoder;
pub mod field_encoder;

pub use fallback::FallbackTable;
pub use feature_encoder::{FeatureEncoder, UnseenCategoryPolicy};
pub use field_encoder::{FieldEncoder, FieldEncoders, numeric_value};
