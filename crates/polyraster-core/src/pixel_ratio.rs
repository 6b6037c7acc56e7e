use serde::{Deserialize, Serialize};

/// Tracks whether stroke widths are scaled by the display's device pixel
/// ratio, and the resulting multiplier.
///
/// The multiplier is 1.0 whenever scaling is disabled, and falls back to
/// 1.0 when the runtime reports no ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRatio {
    enabled: bool,
    ratio: f64,
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self {
            enabled: false,
            ratio: 1.0,
        }
    }
}

impl PixelRatio {
    /// Enable or disable pixel-ratio-aware scaling. `reported` is the
    /// runtime's device pixel ratio, if it exposes one.
    pub fn set_aware(&mut self, enabled: bool, reported: Option<f64>) -> &mut Self {
        self.enabled = enabled;
        self.ratio = if enabled {
            reported.unwrap_or(1.0)
        } else {
            1.0
        };
        self
    }

    pub fn is_aware(&self) -> bool {
        self.enabled
    }

    /// The active stroke-width multiplier.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}
