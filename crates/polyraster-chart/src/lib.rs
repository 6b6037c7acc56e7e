//! # PolyRaster Chart
//!
//! The viewport-synchronized polygon raster overlay chart. Each render
//! cycle captures the map viewport, projects it, builds a declarative
//! render spec, and submits it to the remote render service; the
//! asynchronous response is correlated back to its own captured bounds
//! by token and composited into the map as a single overlay layer.
//!
//! Collaborators (map widget, query source, render service, object-URL
//! provider) are traits; `PolyRasterChart` composes concrete
//! implementations explicitly.

pub mod capabilities;
pub mod chart;
pub mod decode;
pub mod map;
pub mod overlay;
pub mod query;
pub mod service;

pub use capabilities::{Anchorable, Cappable, ColorScaled, MapBound};
pub use chart::{ChartError, PolyRasterChart};
pub use decode::{DecodeError, ImageDecoder, ObjectUrlProvider, RenderTargetCapabilities};
pub use map::{ImageSourceData, MapWidget, OverlayPaint};
pub use overlay::OverlayLayer;
pub use query::{QueryKind, QuerySource};
pub use service::{RenderOptions, RenderResponse, RenderService, RenderServiceError, RenderToken};
