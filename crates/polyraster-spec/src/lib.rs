//! # PolyRaster Spec
//!
//! The declarative rendering specification sent to the remote render
//! backend: scales, a single polygon mark, and one data source binding a
//! SQL query to the polygon geometry table. Serializes to the backend's
//! JSON wire shape via serde.

pub mod builder;
pub mod spec;

pub use builder::{build_poly_spec, StrokeStyle};
pub use spec::{
    DataSpec, FieldBinding, MarkProperties, MarkSource, MarkSpec, RenderSpec, ScaleRange, ScaleSpec,
};
