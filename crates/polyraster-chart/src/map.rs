use serde::{Deserialize, Serialize};

use polyraster_core::{ProjectedBounds, ViewportBounds};

/// Image payload for the map widget's image-source API: a displayable
/// URI plus the geo-referenced corners it stretches over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSourceData {
    pub url: String,
    pub coordinates: ProjectedBounds,
}

/// Paint properties for the raster overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPaint {
    #[serde(rename = "raster-opacity")]
    pub opacity: f64,
    #[serde(rename = "raster-fade-duration")]
    pub fade_duration: f64,
}

/// The subset of an interactive map widget the chart drives.
///
/// Pan/zoom and everything else about the widget is the embedder's
/// business; the chart only reads bounds and mutates its one overlay.
pub trait MapWidget {
    /// Current viewport corners, or `None` when the widget cannot report
    /// bounds yet.
    fn viewport_bounds(&self) -> Option<ViewportBounds>;

    /// Whether the widget has finished loading. Compositing into an
    /// unready map is undefined, so responses are dropped until this
    /// reports true.
    fn is_loaded(&self) -> bool;

    fn add_image_source(&mut self, name: &str, data: ImageSourceData);

    fn update_image_source(&mut self, name: &str, data: ImageSourceData);

    fn add_overlay_layer(&mut self, id: &str, source: &str, paint: OverlayPaint);
}
