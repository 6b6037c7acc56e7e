use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use polyraster_core::{ColorScale, JoinConfigError, PixelRatio, PolyJoin, ProjectedBounds};
use polyraster_spec::{build_poly_spec, StrokeStyle};

use crate::capabilities::{Anchorable, Cappable, ColorScaled, MapBound};
use crate::decode::{DecodeError, ImageDecoder, ObjectUrlProvider};
use crate::map::MapWidget;
use crate::overlay::OverlayLayer;
use crate::query::{QueryKind, QuerySource};
use crate::service::{RenderOptions, RenderResponse, RenderService, RenderServiceError, RenderToken};

/// Name of the chart's single overlay source and layer.
const OVERLAY_LAYER_NAME: &str = "overlay_polygons";

/// Render spec wire version sent with every submission.
const SPEC_VERSION: u32 = 1;

const DEFAULT_OPACITY: f64 = 0.85;
const DEFAULT_BORDER_COLOR: &str = "white";
const DEFAULT_BORDER_WIDTH: f64 = 0.5;
const DEFAULT_CAP: usize = 100;

/// A render cycle or response-handling failure.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Join(#[from] JoinConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to serialize render spec: {0}")]
    Spec(#[from] serde_json::Error),

    #[error(transparent)]
    Service(#[from] RenderServiceError),
}

/// The polygon raster overlay chart.
///
/// Owns the overlay layer lifecycle and the correlation table mapping
/// in-flight render tokens to the projected bounds that produced them.
/// Responses may arrive in any order; each composites with its own
/// recorded bounds, and whichever is processed last wins.
pub struct PolyRasterChart<M, Q, R, U> {
    id: Uuid,
    map: M,
    query: Q,
    service: R,
    decoder: ImageDecoder<U>,
    layer: OverlayLayer,
    render_bounds: HashMap<RenderToken, ProjectedBounds>,
    colors: ColorScale,
    cap: usize,
    opacity: f64,
    border_color: String,
    border_width: f64,
    poly_join: PolyJoin,
    pixel_ratio: PixelRatio,
    anchor: Option<String>,
    chart_group: Option<String>,
}

impl<M, Q, R, U> std::fmt::Debug for PolyRasterChart<M, Q, R, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolyRasterChart")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<M, Q, R, U> PolyRasterChart<M, Q, R, U>
where
    M: MapWidget,
    Q: QuerySource,
    R: RenderService,
    U: ObjectUrlProvider,
{
    pub fn new(map: M, query: Q, service: R, decoder: ImageDecoder<U>) -> Self {
        Self {
            id: Uuid::new_v4(),
            map,
            query,
            service,
            decoder,
            layer: OverlayLayer::new(OVERLAY_LAYER_NAME),
            render_bounds: HashMap::new(),
            colors: ColorScale::default(),
            cap: DEFAULT_CAP,
            opacity: DEFAULT_OPACITY,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            poly_join: PolyJoin::default(),
            pixel_ratio: PixelRatio::default(),
            anchor: None,
            chart_group: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // ── Configuration ────────────────────────────────────────────────

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) -> &mut Self {
        self.opacity = opacity;
        self
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn set_border_color(&mut self, color: &str) -> &mut Self {
        self.border_color = color.to_string();
        self
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: f64) -> &mut Self {
        self.border_width = width;
        self
    }

    pub fn poly_join(&self) -> &PolyJoin {
        &self.poly_join
    }

    /// Set the polygon join configuration. Fails synchronously on an
    /// invalid configuration, leaving the previous value in place.
    pub fn set_poly_join(
        &mut self,
        table: &str,
        keys_column: &str,
    ) -> Result<&mut Self, JoinConfigError> {
        self.poly_join = PolyJoin::new(table, keys_column)?;
        Ok(self)
    }

    /// Toggle device-pixel-ratio-aware stroke scaling. `reported` is the
    /// runtime's device pixel ratio, if it exposes one.
    pub fn set_pixel_ratio_aware(&mut self, enabled: bool, reported: Option<f64>) -> &mut Self {
        self.pixel_ratio.set_aware(enabled, reported);
        self
    }

    /// The active stroke-width multiplier.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio.ratio()
    }

    // ── Render cycle ─────────────────────────────────────────────────

    /// Number of dispatched renders still awaiting a response.
    pub fn pending_render_count(&self) -> usize {
        self.render_bounds.len()
    }

    /// Drop all pending correlations and force the next successful
    /// response to re-create the overlay from scratch.
    pub fn reset_layer(&mut self) {
        self.render_bounds.clear();
        self.layer.deactivate();
        log::debug!("chart {}: layer reset", self.id);
    }

    /// Dispatch one render cycle: capture and project the viewport,
    /// build and submit the spec, and record the correlation token.
    ///
    /// A submission failure propagates without touching the correlation
    /// table. No retries.
    pub fn render(&mut self) -> Result<(), ChartError> {
        let Some(bounds) = self.map.viewport_bounds() else {
            log::debug!("chart {}: map reports no viewport bounds, skipping", self.id);
            return Ok(());
        };
        let projected = bounds.project();

        let sql = match self.query.kind() {
            QueryKind::Dimension => self.query.build_top_query(self.cap, true, false),
            QueryKind::Aggregated => self.query.build_top_query(self.cap, false, true),
        };

        let stroke = StrokeStyle {
            color: self.border_color.clone(),
            width: self.border_width * self.pixel_ratio.ratio(),
        };
        let spec = build_poly_spec(&sql, &projected, &self.colors, &self.poly_join, &stroke);
        let spec_json = spec.to_json()?;

        let token = self
            .service
            .render(SPEC_VERSION, &spec_json, &RenderOptions::default())?;
        log::debug!("chart {}: dispatched render, token {}", self.id, token);
        self.render_bounds.insert(token, projected);
        Ok(())
    }

    /// Alias of [`render`](Self::render).
    pub fn redraw(&mut self) -> Result<(), ChartError> {
        self.render()
    }

    /// Handle one asynchronous render completion.
    ///
    /// Empty payloads, unknown tokens, and an unloaded map are expected
    /// conditions and complete as no-ops; only decoding failures on a
    /// correlated, usable response are errors.
    pub fn handle_response(&mut self, response: RenderResponse) -> Result<(), ChartError> {
        let payload = match response.image.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => {
                log::debug!("chart {}: empty render response, nothing to composite", self.id);
                return Ok(());
            }
        };

        let Some(bounds) = self.render_bounds.remove(&response.token) else {
            log::debug!(
                "chart {}: response for untracked token {}, dropping",
                self.id,
                response.token
            );
            return Ok(());
        };

        if !self.map.is_loaded() {
            log::debug!("chart {}: map not loaded, dropping response", self.id);
            return Ok(());
        }

        let url = self.decoder.decode(Some(payload))?;
        self.layer.composite(&mut self.map, url, bounds, self.opacity);
        log::debug!("chart {}: composited response {}", self.id, response.token);
        Ok(())
    }
}

// ── Capabilities ─────────────────────────────────────────────────────

impl<M, Q, R, U> MapBound for PolyRasterChart<M, Q, R, U>
where
    M: MapWidget,
    Q: QuerySource,
    R: RenderService,
    U: ObjectUrlProvider,
{
    type Map = M;

    fn map(&self) -> &M {
        &self.map
    }

    fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}

impl<M, Q, R, U> ColorScaled for PolyRasterChart<M, Q, R, U>
where
    M: MapWidget,
    Q: QuerySource,
    R: RenderService,
    U: ObjectUrlProvider,
{
    fn colors(&self) -> &ColorScale {
        &self.colors
    }

    fn set_colors(&mut self, colors: ColorScale) -> &mut Self {
        self.colors = colors;
        self
    }
}

impl<M, Q, R, U> Cappable for PolyRasterChart<M, Q, R, U>
where
    M: MapWidget,
    Q: QuerySource,
    R: RenderService,
    U: ObjectUrlProvider,
{
    fn cap(&self) -> usize {
        self.cap
    }

    fn set_cap(&mut self, cap: usize) -> &mut Self {
        self.cap = cap;
        self
    }
}

impl<M, Q, R, U> Anchorable for PolyRasterChart<M, Q, R, U>
where
    M: MapWidget,
    Q: QuerySource,
    R: RenderService,
    U: ObjectUrlProvider,
{
    fn anchor(&mut self, parent: &str, chart_group: Option<&str>) -> &mut Self {
        self.anchor = Some(parent.to_string());
        self.chart_group = chart_group.map(|g| g.to_string());
        log::info!("chart {}: anchored to {}", self.id, parent);
        self
    }

    fn anchor_name(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    fn chart_group(&self) -> Option<&str> {
        self.chart_group.as_deref()
    }
}
