//! AI photo editing SDK backed by the Gemini image models.
//!
//! This crate translates typed edit requests (localized retouch, style
//! filter, global adjustment, background removal, text replacement,
//! description, text-to-image generation) into multimodal API calls and
//! classifies the heterogeneous responses into a single outcome: an
//! image, text, or a typed error.
//!
//! # Example
//!
//! ```rust,no_run
//! use retouch::{Client, Hotspot, ImageResource};
//!
//! #[tokio::main]
//! async fn main() -> retouch::Result<()> {
//!     let client = Client::from_env()?;
//!     let image = ImageResource::from_path("photo.jpg");
//!
//!     let edited = client
//!         .edits()
//!         .retouch(&image, "remove the lamp post", Hotspot::new(420, 310))
//!         .await?;
//!
//!     println!("{}", edited.to_data_uri());
//!     Ok(())
//! }
//! ```

mod classify;
mod client;
mod edit;
mod error;
pub mod http;
mod models;
pub mod prompt;
mod resource;
mod types;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, ENV_API_KEY};
pub use edit::EditService;
pub use error::{Error, Result};
pub use models::*;
pub use resource::ImageResource;
pub use types::{
    block_reason, finish_reason, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Hotspot, InlineImage, Part, PredictInstance,
    PredictParameters, PredictRequest, Prediction, PredictResponse, PromptFeedback,
    ResponseModality, TextStyle,
};
