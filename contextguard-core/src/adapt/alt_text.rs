//! Alternative text for images

use crate::normalize::{clamp_chars, collapse_whitespace};
use serde::{Deserialize, Serialize};
use url::Url;

/// Characters of surrounding context used in a fallback description
pub const CONTEXT_CHARS: usize = 100;

/// Longest alt text accepted from a native generator
pub const MAX_ALT_CHARS: usize = 125;

/// Characters of parent text captured by `Document::image_context`
pub const IMAGE_CONTEXT_CHARS: usize = 200;

/// What is known about an image and its surroundings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContext {
    /// Image source as written in the document
    pub src: String,
    /// Existing alt attribute, if any
    #[serde(default)]
    pub current_alt: Option<String>,
    /// Text around the image
    #[serde(default)]
    pub context: String,
}

impl ImageContext {
    /// Create a context for an image source
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    /// Set the surrounding text
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the existing alt text
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.current_alt = Some(alt.into());
        self
    }

    /// Host of an absolute image URL
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.src)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

/// Describe an image without a vision model
///
/// An existing non-blank alt text always wins.
pub fn fallback_alt_text(image: &ImageContext) -> String {
    if let Some(alt) = image.current_alt.as_deref() {
        let alt = alt.trim();
        if !alt.is_empty() {
            return alt.to_string();
        }
    }

    let context = collapse_whitespace(&image.context);
    let context = clamp_chars(&context, CONTEXT_CHARS);

    match (image.host(), context.is_empty()) {
        (Some(host), false) => format!("Image from {host}: {context}"),
        (Some(host), true) => format!("Image from {host}"),
        (None, false) => format!("Image: {context}"),
        (None, true) => "Image description unavailable".to_string(),
    }
}

/// Trim and clamp a generated alt text to [`MAX_ALT_CHARS`]
pub fn clamp_alt_text(text: &str) -> String {
    clamp_chars(text.trim(), MAX_ALT_CHARS).to_string()
}
