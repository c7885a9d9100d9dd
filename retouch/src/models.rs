//! Model constants for the edit, text, and image-synthesis paths.

/// gemini-2.5-flash-image, multimodal image editing model.
pub const MODEL_IMAGE_EDIT: &str = "gemini-2.5-flash-image";

/// gemini-2.5-flash, text-capable model used for descriptions.
pub const MODEL_TEXT: &str = "gemini-2.5-flash";

/// imagen-4.0-generate-001, dedicated text-to-image synthesis model.
pub const MODEL_IMAGE_SYNTHESIS: &str = "imagen-4.0-generate-001";
