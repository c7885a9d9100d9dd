//! Wire types for the generateContent and predict endpoints, plus the
//! parameter types the edit operations take.

use serde::{Deserialize, Serialize};

// ==================== Finish Reasons ====================

/// Finish reason codes returned by the service.
pub mod finish_reason {
    /// Nominal completion.
    pub const STOP: &str = "STOP";
    /// Generation hit the output token limit.
    pub const MAX_TOKENS: &str = "MAX_TOKENS";
    /// Generation stopped by the safety filter.
    pub const SAFETY: &str = "SAFETY";
    /// Generation stopped for recitation of training data.
    pub const RECITATION: &str = "RECITATION";
    /// The generated image tripped the image safety filter.
    pub const IMAGE_SAFETY: &str = "IMAGE_SAFETY";
}

/// Block reason codes for requests refused before generation began.
pub mod block_reason {
    pub const SAFETY: &str = "SAFETY";
    pub const PROHIBITED_CONTENT: &str = "PROHIBITED_CONTENT";
    pub const OTHER: &str = "OTHER";
}

// ==================== Operation Parameters ====================

/// Pixel coordinate marking the focus point of a localized edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: u32,
    pub y: u32,
}

impl Hotspot {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Style hints for replacement text.
///
/// Every field is independently optional. An absent field means "infer
/// from context", not "use a default". Values are passed through to the
/// instruction verbatim; `color` may be a color term or a hex string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl TextStyle {
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Returns true if no style hint was provided at all.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
    }
}

// ==================== Inline Image ====================

/// A mime type plus base64 payload.
///
/// Used both for the inline image sent with a request and for the image
/// the service returns. This is the success outcome of every
/// image-producing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Renders the image as a `data:<mime>;base64,<payload>` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decodes the base64 payload into raw image bytes.
    pub fn decode(&self) -> crate::error::Result<Vec<u8>> {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        Ok(STANDARD.decode(&self.data)?)
    }
}

// ==================== generateContent Wire Types ====================

/// One part of a content block: either text or inline image data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineImage>,
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Creates an inline image part.
    pub fn image(image: InlineImage) -> Self {
        Self {
            inline_data: Some(image),
            ..Default::default()
        }
    }
}

/// An ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Response modality requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseModality {
    Text,
    Image,
}

/// Generation configuration for a generateContent call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub response_modalities: Vec<ResponseModality>,
}

/// Request body for a generateContent call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Feedback on a request that was refused before generation began.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason_message: Option<String>,
}

/// One generation candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Response body of a generateContent call.
///
/// Read once per call, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Iterates the content parts of the first candidate, in order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter())
            .into_iter()
            .flatten()
    }

    /// The finish reason of the first candidate, if present.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Trimmed concatenation of all text parts of the first candidate.
    ///
    /// Returns `None` when the response carried no text at all.
    pub fn text(&self) -> Option<String> {
        let joined = self
            .parts()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// ==================== predict Wire Types ====================

/// One prompt instance for an image-synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictInstance {
    pub prompt: String,
}

/// Image-synthesis parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub sample_count: u32,
    pub output_mime_type: String,
    pub aspect_ratio: String,
}

impl Default for PredictParameters {
    fn default() -> Self {
        Self {
            sample_count: 1,
            output_mime_type: "image/png".to_string(),
            aspect_ratio: "1:1".to_string(),
        }
    }
}

/// Request body for an image-synthesis (predict) call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

/// One generated image entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub bytes_base64_encoded: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Response body of an image-synthesis (predict) call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_serializes_camel_case() {
        let part = Part::image(InlineImage::new("image/png", "QUJD"));
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["inlineData"]["mimeType"], "image/png");
        assert_eq!(value["inlineData"]["data"], "QUJD");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn response_text_concatenates_and_trims() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "  first "}, {"text": "second"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.text().unwrap(), "first \nsecond");
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn response_text_empty_is_none() {
        let response = GenerateContentResponse::default();
        assert!(response.text().is_none());
        assert!(response.finish_reason().is_none());
        assert_eq!(response.parts().count(), 0);
    }

    #[test]
    fn data_uri_round_trip() {
        let image = InlineImage::new("image/jpeg", "aGVsbG8=");
        assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(image.decode().unwrap(), b"hello");
    }

    #[test]
    fn text_style_is_empty() {
        assert!(TextStyle::default().is_empty());
        assert!(!TextStyle::default().with_bold(false).is_empty());
        assert!(!TextStyle::default().with_color("#ff0000").is_empty());
    }

    #[test]
    fn predict_parameters_defaults() {
        let params = PredictParameters::default();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["sampleCount"], 1);
        assert_eq!(value["outputMimeType"], "image/png");
        assert_eq!(value["aspectRatio"], "1:1");
    }
}
