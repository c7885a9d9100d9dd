//! API client.

use std::sync::Arc;
use std::time::Duration;

use crate::edit::EditService;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{MODEL_IMAGE_EDIT, MODEL_IMAGE_SYNTHESIS, MODEL_TEXT};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// API client.
///
/// Built once from configuration at process start and shared by every
/// operation; the client itself holds no per-call state.
///
/// # Example
///
/// ```rust,no_run
/// use retouch::Client;
///
/// # fn main() -> retouch::Result<()> {
/// let client = Client::from_env()?;
/// let edits = client.edits();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

/// Model names used by the edit service, one per operation family.
#[derive(Debug, Clone)]
pub(crate) struct ModelSelection {
    pub edit: String,
    pub text: String,
    pub synthesis: String,
}

#[derive(Debug)]
struct ClientConfig {
    api_key: String,
    base_url: String,
    models: ModelSelection,
}

impl Client {
    /// Creates a new client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_API_KEY} is not set")))?;
        Self::new(api_key)
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Returns the configured API key.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the model used for image edit operations.
    pub fn edit_model(&self) -> &str {
        &self.config.models.edit
    }

    /// Returns the model used for description calls.
    pub fn text_model(&self) -> &str {
        &self.config.models.text
    }

    /// Returns the model used for text-to-image synthesis.
    pub fn synthesis_model(&self) -> &str {
        &self.config.models.synthesis
    }

    /// Returns the photo edit service.
    pub fn edits(&self) -> EditService {
        EditService::new(self.http.clone(), self.config.models.clone())
    }
}

/// Builder for creating an API client.
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    models: ModelSelection,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            models: ModelSelection {
                edit: MODEL_IMAGE_EDIT.to_string(),
                text: MODEL_TEXT.to_string(),
                synthesis: MODEL_IMAGE_SYNTHESIS.to_string(),
            },
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bounds every request with a timeout.
    ///
    /// No timeout is set by default; unset, a hung remote call hangs the
    /// awaiting caller until the caller itself gives up.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the model used for image edit operations.
    pub fn edit_model(mut self, model: impl Into<String>) -> Self {
        self.models.edit = model.into();
        self
    }

    /// Overrides the model used for description calls.
    pub fn text_model(mut self, model: impl Into<String>) -> Self {
        self.models.text = model.into();
        self
    }

    /// Overrides the model used for text-to-image synthesis.
    pub fn synthesis_model(mut self, model: impl Into<String>) -> Self {
        self.models.synthesis = model.into();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api key must be non-empty".to_string()));
        }

        let http = HttpClient::new(self.base_url.clone(), self.api_key.clone(), self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
            config: ClientConfig {
                api_key: self.api_key,
                base_url: self.base_url,
                models: self.models,
            },
        })
    }
}
