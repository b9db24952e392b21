//! Anthropic Messages API wire types.

use serde::{Deserialize, Serialize};

use super::prompt::strip_data_url;

/// Media type declared for every forwarded image.
pub const IMAGE_MEDIA_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<MessageParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageParam {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

impl ContentBlock {
    /// Image block for base64 data, with any data URL header removed.
    pub fn image(data: &str) -> Self {
        ContentBlock::Image {
            source: ImageSource {
                source_type: "base64".to_string(),
                media_type: IMAGE_MEDIA_TYPE.to_string(),
                data: strip_data_url(data).to_string(),
            },
        }
    }
}

/// Build a single user turn: every image, then the prompt.
pub fn build_messages_request(
    model: &str,
    max_tokens: u32,
    images: &[&str],
    prompt: String,
) -> MessagesRequest {
    let mut content: Vec<ContentBlock> = images
        .iter()
        .map(|data| ContentBlock::image(data))
        .collect();
    content.push(ContentBlock::Text { text: prompt });

    MessagesRequest {
        model: model.to_string(),
        max_tokens,
        messages: vec![MessageParam {
            role: "user".to_string(),
            content,
        }],
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub content: Vec<ResponseBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    /// Text of the first text block, if the model produced one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ResponseBlock::Text { text } => Some(text.as_str()),
            ResponseBlock::Other => None,
        })
    }
}
