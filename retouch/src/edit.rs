//! Photo edit operations.
//!
//! One entry point per edit kind. Every call is independent: it encodes
//! the image, compiles the instruction, dispatches a single request,
//! and classifies the reply. Nothing is cached or shared between calls.

use std::sync::Arc;

use crate::classify;
use crate::client::ModelSelection;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::prompt;
use crate::resource::ImageResource;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Hotspot,
    InlineImage, Part, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
    ResponseModality, TextStyle,
};

/// Photo edit service.
pub struct EditService {
    http: Arc<HttpClient>,
    models: ModelSelection,
}

impl EditService {
    pub(crate) fn new(http: Arc<HttpClient>, models: ModelSelection) -> Self {
        Self { http, models }
    }

    /// Performs a localized edit centered on the hotspot, leaving the
    /// rest of the image untouched.
    pub async fn retouch(
        &self,
        image: &ImageResource,
        prompt_text: &str,
        hotspot: Hotspot,
    ) -> Result<InlineImage> {
        let instruction = prompt::localized_edit(prompt_text, hotspot);
        self.edit_image(image, instruction, "localized edit").await
    }

    /// Applies a stylistic filter to the entire image.
    pub async fn apply_filter(
        &self,
        image: &ImageResource,
        prompt_text: &str,
    ) -> Result<InlineImage> {
        let instruction = prompt::filter(prompt_text);
        self.edit_image(image, instruction, "filter").await
    }

    /// Applies a global, photorealistic adjustment to the whole frame.
    pub async fn apply_adjustment(
        &self,
        image: &ImageResource,
        prompt_text: &str,
    ) -> Result<InlineImage> {
        let instruction = prompt::adjustment(prompt_text);
        self.edit_image(image, instruction, "adjustment").await
    }

    /// Cuts out the main subject on a transparent PNG canvas.
    pub async fn remove_background(&self, image: &ImageResource) -> Result<InlineImage> {
        let instruction = prompt::remove_background();
        self.edit_image(image, instruction, "background removal")
            .await
    }

    /// Replaces text found in the image, styled per `style`.
    pub async fn replace_text(
        &self,
        image: &ImageResource,
        find: &str,
        replace: &str,
        style: &TextStyle,
    ) -> Result<InlineImage> {
        let instruction = prompt::text_replacement(find, replace, style);
        self.edit_image(image, instruction, "text replacement").await
    }

    /// Describes the image as a single paragraph suitable as a prompt
    /// for an image generator.
    pub async fn describe(&self, image: &ImageResource) -> Result<String> {
        let encoded = image.encode().await?;
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::image(encoded), Part::text(prompt::describe())],
            }],
            generation_config: None,
        };

        tracing::debug!(model = %self.models.text, "dispatching description request");
        let response: GenerateContentResponse = self
            .http
            .post(
                &format!("/models/{}:generateContent", self.models.text),
                &request,
            )
            .await?;

        classify::resolve_text(&response, "description")
    }

    /// Generates one square PNG image from a text prompt.
    ///
    /// Any failure on this path, transport included, surfaces as the
    /// uniform [`Error::ImageSynthesis`].
    pub async fn generate(&self, prompt_text: &str) -> Result<InlineImage> {
        self.synthesize(prompt_text)
            .await
            .map_err(|e| Error::ImageSynthesis(e.to_string()))
    }

    async fn synthesize(&self, prompt_text: &str) -> Result<InlineImage> {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt_text.to_string(),
            }],
            parameters: PredictParameters::default(),
        };

        tracing::debug!(model = %self.models.synthesis, "dispatching image synthesis request");
        let response: PredictResponse = self
            .http
            .post(&format!("/models/{}:predict", self.models.synthesis), &request)
            .await?;

        classify::resolve_predictions(&response, "image generation")
    }

    /// Shared dispatch path for image-producing edits: inline image
    /// first, instruction second, both response modalities requested so
    /// the classifier can fall back to text diagnostics.
    async fn edit_image(
        &self,
        image: &ImageResource,
        instruction: String,
        context: &str,
    ) -> Result<InlineImage> {
        let encoded = image.encode().await?;
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::image(encoded), Part::text(instruction)],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec![ResponseModality::Image, ResponseModality::Text],
            }),
        };

        tracing::debug!(model = %self.models.edit, context, "dispatching edit request");
        let response: GenerateContentResponse = self
            .http
            .post(
                &format!("/models/{}:generateContent", self.models.edit),
                &request,
            )
            .await?;

        let outcome = classify::resolve_image(&response, context);
        if let Err(Error::Blocked { reason, .. }) = &outcome {
            tracing::warn!(context, %reason, "request blocked by the service");
        }
        outcome
    }
}
