pub mod classify;
pub mod extract;
pub mod types;

pub use classify::classify_line;
pub use extract::{extract_answer, extract_answer_with_kind};
pub use types::{ExtractedAnswer, LineKind};
