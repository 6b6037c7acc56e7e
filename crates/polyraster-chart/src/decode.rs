use base64::Engine;
use thiserror::Error;

const PNG_MIME: &str = "image/png";

/// Image decoding failed.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response claimed an image but carried no payload. This is an
    /// integration bug, not a transient condition; it must never render
    /// a blank overlay silently.
    #[error("render response carried no image payload")]
    MissingPayload,

    #[error("invalid base64 image payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// What the embedding render target can do with image URIs.
///
/// Passed in at construction so the decoder stays pure and testable,
/// instead of sniffing ambient runtime globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetCapabilities {
    /// Whether the target can display data-URI images of overlay size
    /// directly.
    pub supports_data_uris: bool,
}

impl Default for RenderTargetCapabilities {
    fn default() -> Self {
        Self {
            supports_data_uris: true,
        }
    }
}

/// Creates transient URLs for in-memory blobs, for targets that cannot
/// take large data URIs. Supplied by the embedding runtime.
pub trait ObjectUrlProvider {
    fn object_url(&mut self, bytes: Vec<u8>, mime: &str) -> String;
}

/// Turns the backend's base64 image payload into a URI the map widget's
/// image-source API accepts.
#[derive(Debug)]
pub struct ImageDecoder<U> {
    capabilities: RenderTargetCapabilities,
    urls: U,
}

impl<U: ObjectUrlProvider> ImageDecoder<U> {
    pub fn new(capabilities: RenderTargetCapabilities, urls: U) -> Self {
        Self { capabilities, urls }
    }

    /// Decode `payload` to a displayable URI.
    ///
    /// Targets that take data URIs get one without any decoding; other
    /// targets get the payload decoded to bytes and exposed through a
    /// transient object URL.
    pub fn decode(&mut self, payload: Option<&str>) -> Result<String, DecodeError> {
        let payload = match payload {
            Some(p) if !p.is_empty() => p,
            _ => return Err(DecodeError::MissingPayload),
        };

        if self.capabilities.supports_data_uris {
            return Ok(format!("data:{PNG_MIME};base64,{payload}"));
        }

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Ok(self.urls.object_url(bytes, PNG_MIME))
    }
}
