//! HTTP client for the hosted recognition endpoint.
//!
//! One invocation performs exactly one round trip: read the image, base64
//! encode it, POST a JSON body, parse the JSON reply. There are no retries
//! and no intermediate states; every failure maps onto one
//! [`RecognizeError`](crate::RecognizeError) variant and is surfaced
//! immediately.
//!
//! # Example
//!
//! ```rust,no_run
//! use recognize::{RecognizeClient, RecognizeConfig, RecognizeOptions};
//!
//! #[tokio::main]
//! async fn main() -> recognize::Result<()> {
//!     let client = RecognizeClient::new()?;
//!
//!     let options = RecognizeOptions {
//!         render: true,
//!         ..Default::default()
//!     };
//!     let result = client.recognize_file("equation.png", &options).await?;
//!
//!     println!("LaTeX: {}", result.text);
//!     println!("HTML: {}", result.rendered_html);
//!     Ok(())
//! }
//! ```

use crate::config::RecognizeConfig;
use crate::error::{RecognizeError, Result};
use crate::io;
use crate::types::{RecognizeOptions, RecognizeResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Production endpoint of the hosted recognition service.
pub const DEFAULT_ENDPOINT: &str = "https://recognize.public.cloud.xpress.ai/recognize";

/// Global Tokio runtime for synchronous operations.
///
/// Lazily initialized on first use and shared across all sync wrappers -
/// creating a runtime per call would dominate the cost of the request itself.
///
/// The `.expect()` is justified: runtime creation only fails on resource
/// exhaustion, this is one-time initialization, and nothing works without it.
static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create global Tokio runtime - system may be out of resources")
});

/// Recognition request payload
#[derive(Debug, Serialize)]
struct RecognizeRequest {
    image: String,
    ocr_type: String,
    ocr_box: String,
    ocr_color: String,
    render: bool,
}

impl RecognizeRequest {
    fn new(image: &[u8], options: &RecognizeOptions) -> Self {
        Self {
            image: BASE64.encode(image),
            ocr_type: options.ocr_type.clone(),
            ocr_box: options.ocr_box.clone(),
            ocr_color: options.ocr_color.clone(),
            render: options.render,
        }
    }
}

/// Recognition response payload.
///
/// Both fields are optional on the wire; a missing field resolves to an empty
/// string, never an error.
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    rendered_html: String,
}

/// Client for the hosted recognition service.
///
/// Holds a configured `reqwest::Client` and the endpoint URL. The client is
/// cheap to clone and safe to share across tasks; each call is independent
/// and imposes no ordering on concurrent invocations.
#[derive(Debug, Clone)]
pub struct RecognizeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RecognizeClient {
    /// Create a client against the production endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns `RecognizeError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_config(&RecognizeConfig::default())
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: &RecognizeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RecognizeError::transport_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Recognize text in an image file.
    ///
    /// Reads the file fully into memory before anything else; an unreadable
    /// path fails with `RecognizeError::Io` and no network request is issued.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file
    /// * `options` - Recognition options (see [`RecognizeOptions`] for defaults)
    pub async fn recognize_file(&self, path: impl AsRef<Path>, options: &RecognizeOptions) -> Result<RecognizeResult> {
        let path = path.as_ref();
        let bytes = io::read_file_async(path).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read image file");
        self.recognize_bytes(&bytes, options).await
    }

    /// Recognize text in raw image bytes.
    ///
    /// # Errors
    ///
    /// - `RecognizeError::Validation` - `image` is empty
    /// - `RecognizeError::Transport` - connection, DNS, or timeout failure
    /// - `RecognizeError::Remote` - the service answered with a non-2xx status
    /// - `RecognizeError::ResponseFormat` - the body is not valid JSON
    pub async fn recognize_bytes(&self, image: &[u8], options: &RecognizeOptions) -> Result<RecognizeResult> {
        if image.is_empty() {
            return Err(RecognizeError::validation("Empty image data"));
        }

        let request = RecognizeRequest::new(image, options);
        tracing::debug!(
            endpoint = %self.endpoint,
            ocr_type = %request.ocr_type,
            render = request.render,
            "submitting recognition request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognizeError::transport_with_source(format!("Request to {} failed", self.endpoint), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecognizeError::transport_with_source("Failed to read response body", e))?;

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body.trim().to_string()
            };
            return Err(RecognizeError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: RecognizeResponse = serde_json::from_str(&body)
            .map_err(|e| RecognizeError::response_format_with_source("Response body is not valid JSON", e))?;

        tracing::debug!(chars = parsed.text.len(), "recognition complete");

        // The rendered view is only surfaced when it was actually requested.
        Ok(RecognizeResult {
            text: parsed.text,
            rendered_html: if options.render { parsed.rendered_html } else { String::new() },
        })
    }

    /// Synchronous wrapper around [`recognize_file`](Self::recognize_file).
    ///
    /// Blocks the calling thread on the shared global runtime. Must not be
    /// called from within an async context.
    pub fn recognize_file_sync(&self, path: impl AsRef<Path>, options: &RecognizeOptions) -> Result<RecognizeResult> {
        GLOBAL_RUNTIME.block_on(self.recognize_file(path, options))
    }

    /// Synchronous wrapper around [`recognize_bytes`](Self::recognize_bytes).
    pub fn recognize_bytes_sync(&self, image: &[u8], options: &RecognizeOptions) -> Result<RecognizeResult> {
        GLOBAL_RUNTIME.block_on(self.recognize_bytes(image, options))
    }
}
