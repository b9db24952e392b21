use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
///
/// Callers send either a single `image` or an `images` list. Each entry is base64 image
/// data, optionally prefixed with a `data:image/...;base64,` header.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    /// What the professor said, transcribed by the client.
    pub transcription: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("No image provided")]
    NoImage,
}

/// Which prompt the model receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Simple,
    Complex,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Simple, Mode::Complex];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Complex => "complex",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnalyzeRequest {
    /// Images to forward. An explicit `images` list wins over `image`, even when empty.
    pub fn image_list(&self) -> Vec<&str> {
        match (&self.images, &self.image) {
            (Some(images), _) => images.iter().map(String::as_str).collect(),
            (None, Some(image)) => vec![image.as_str()],
            (None, None) => Vec::new(),
        }
    }

    /// The transcription, if any text was actually sent.
    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref().filter(|t| !t.is_empty())
    }

    /// Several images or a transcription switch to the complex prompt.
    pub fn mode(&self) -> Mode {
        let several_images = self.images.as_ref().is_some_and(|images| images.len() > 1);

        if several_images || self.transcription().is_some() {
            Mode::Complex
        } else {
            Mode::Simple
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.image_list().is_empty() {
            return Err(RequestError::NoImage);
        }
        Ok(())
    }
}

/// Successful reply of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    /// The extracted answer line.
    pub text: String,
    /// The model's whole reply.
    pub full_analysis: String,
    pub mode: Mode,
    /// Milliseconds spent handling the request.
    pub timing: u64,
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub tts: String,
    pub modes: Vec<Mode>,
}

impl HealthResponse {
    pub fn ok(model: &str) -> Self {
        Self {
            status: "ok".to_string(),
            model: model.to_string(),
            tts: "browser".to_string(),
            modes: Mode::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        image: Option<&str>,
        images: Option<Vec<&str>>,
        transcription: Option<&str>,
    ) -> AnalyzeRequest {
        AnalyzeRequest {
            image: image.map(str::to_string),
            images: images.map(|list| list.into_iter().map(str::to_string).collect()),
            transcription: transcription.map(str::to_string),
        }
    }

    #[test]
    fn test_single_image_is_simple() {
        let req = request(Some("abc"), None, None);
        assert_eq!(req.image_list(), vec!["abc"]);
        assert_eq!(req.mode(), Mode::Simple);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_images_list_wins_over_image() {
        let req = request(Some("single"), Some(vec!["one"]), None);
        assert_eq!(req.image_list(), vec!["one"]);
        assert_eq!(req.mode(), Mode::Simple);
    }

    #[test]
    fn test_several_images_is_complex() {
        let req = request(None, Some(vec!["one", "two"]), None);
        assert_eq!(req.mode(), Mode::Complex);
    }

    #[test]
    fn test_transcription_is_complex() {
        let req = request(Some("abc"), None, Some("Regardez la question trois"));
        assert_eq!(req.mode(), Mode::Complex);
        assert_eq!(req.transcription(), Some("Regardez la question trois"));
    }

    #[test]
    fn test_empty_transcription_is_ignored() {
        let req = request(Some("abc"), None, Some(""));
        assert_eq!(req.mode(), Mode::Simple);
        assert_eq!(req.transcription(), None);
    }

    #[test]
    fn test_no_image() {
        assert_eq!(
            request(None, None, Some("bonjour")).validate(),
            Err(RequestError::NoImage)
        );
        assert_eq!(
            request(Some("ignored"), Some(vec![]), None).validate(),
            Err(RequestError::NoImage)
        );
    }

    #[test]
    fn test_deserialize_request() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"images":["a","b"],"transcription":"x"}"#).unwrap();
        assert_eq!(req.image_list(), vec!["a", "b"]);
        assert!(req.image.is_none());
    }

    #[test]
    fn test_serialize_response_uses_camel_case() {
        let response = AnalyzeResponse {
            success: true,
            text: "Question 1 réponse A".to_string(),
            full_analysis: "...\nQuestion 1 réponse A".to_string(),
            mode: Mode::Complex,
            timing: 1234,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["fullAnalysis"], "...\nQuestion 1 réponse A");
        assert_eq!(value["mode"], "complex");
        assert_eq!(value["timing"], 1234);
    }

    #[test]
    fn test_health_response() {
        let value = serde_json::to_value(HealthResponse::ok("claude-test")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "ok",
                "model": "claude-test",
                "tts": "browser",
                "modes": ["simple", "complex"],
            })
        );
    }
}
