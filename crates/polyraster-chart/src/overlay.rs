use polyraster_core::ProjectedBounds;

use crate::map::{ImageSourceData, MapWidget, OverlayPaint};

/// Lifecycle state of the chart's single raster overlay layer.
///
/// The source and layer are created on the first composite and updated
/// in place thereafter; the layer is never removed and re-added, which
/// would flicker and lose paint properties already applied.
#[derive(Debug, Clone)]
pub struct OverlayLayer {
    name: String,
    is_active: bool,
}

impl OverlayLayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Force the next composite to re-create the source and layer.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Composite one decoded image into the map at the given bounds.
    pub fn composite<M: MapWidget>(
        &mut self,
        map: &mut M,
        url: String,
        coordinates: ProjectedBounds,
        opacity: f64,
    ) {
        let data = ImageSourceData { url, coordinates };
        if self.is_active {
            map.update_image_source(&self.name, data);
        } else {
            map.add_image_source(&self.name, data);
            map.add_overlay_layer(
                &self.name,
                &self.name,
                OverlayPaint {
                    opacity,
                    fade_duration: 0.0,
                },
            );
            self.is_active = true;
        }
    }
}
