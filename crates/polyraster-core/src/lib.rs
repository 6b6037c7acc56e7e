//! # PolyRaster Core
//!
//! Geometry primitives (geographic and Web Mercator projected points,
//! viewport bounds), the WGS84 → Web Mercator projection, the linear
//! color scale, the polygon join configuration, and the device pixel
//! ratio controller.
//!
//! Everything here is pure data and pure math; the render cycle lives
//! in `polyraster-chart`.

pub mod color;
pub mod geometry;
pub mod join;
pub mod pixel_ratio;
pub mod projection;

pub use color::ColorScale;
pub use geometry::{GeoPoint, ProjectedBounds, ProjectedPoint, ViewportBounds};
pub use join::{JoinConfigError, PolyJoin};
pub use pixel_ratio::PixelRatio;
