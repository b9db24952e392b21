pub mod payload;
pub mod prompt;
pub mod types;

pub use payload::{
    build_messages_request, ContentBlock, ImageSource, MessageParam, MessagesRequest,
    MessagesResponse, ResponseBlock,
};
pub use prompt::{build_prompt, strip_data_url, PROMPT_COMPLEX, PROMPT_SIMPLE};
pub use types::{AnalyzeRequest, AnalyzeResponse, HealthResponse, Mode, RequestError};

/// Return at most `max_chars` characters of `text`, for log previews.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
