use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque correlation token assigned by the render backend, returned
/// synchronously at submission and echoed back in the completion.
pub type RenderToken = String;

/// Submission-time options for the render call. Currently empty; the
/// backend accepts an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {}

/// The backend's completion payload for one submitted render.
///
/// `image` is a base64-encoded PNG; it is absent (or empty) when the
/// render produced no pixels, which is a normal outcome when zero
/// features fall inside the requested bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResponse {
    pub token: RenderToken,
    pub image: Option<String>,
}

/// The render service rejected or failed a submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("render service error: {0}")]
pub struct RenderServiceError(pub String);

/// The remote rendering backend.
///
/// Submission is synchronous and yields the correlation token; the
/// completion arrives later through the embedder, which hands it to
/// [`crate::PolyRasterChart::handle_response`]. Exactly one completion
/// per token.
pub trait RenderService {
    fn render(
        &mut self,
        version: u32,
        spec_json: &str,
        options: &RenderOptions,
    ) -> Result<RenderToken, RenderServiceError>;
}
