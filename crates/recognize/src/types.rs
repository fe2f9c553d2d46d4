//! Request options and recognition results.

use serde::{Deserialize, Serialize};

/// Options forwarded to the recognition endpoint.
///
/// Every field has a documented default, applied whenever the corresponding
/// value is absent - from the API, a config file, or the CLI alike:
/// `ocr_type = "format"`, `ocr_box = ""`, `ocr_color = ""`, `render = false`.
///
/// With `ocr_type = "format"` the service returns LaTeX-formatted output for
/// recognized math. `ocr_box` and `ocr_color` are region and color hints
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizeOptions {
    /// Type of OCR to perform
    #[serde(default = "default_ocr_type")]
    pub ocr_type: String,

    /// Bounding-box hint for the recognition region
    #[serde(default)]
    pub ocr_box: String,

    /// Color hint for the recognition region
    #[serde(default)]
    pub ocr_color: String,

    /// Request a rendered HTML view of the result
    #[serde(default)]
    pub render: bool,
}

fn default_ocr_type() -> String {
    "format".to_string()
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            ocr_type: default_ocr_type(),
            ocr_box: String::new(),
            ocr_color: String::new(),
            render: false,
        }
    }
}

/// Outcome of one recognition call.
///
/// `rendered_html` is empty unless [`RecognizeOptions::render`] was set and
/// the service returned a rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizeResult {
    /// Recognized text, LaTeX-formatted when `ocr_type` is `"format"`
    pub text: String,

    /// Rendered HTML view of the recognized content
    #[serde(default)]
    pub rendered_html: String,
}
