use serde::{Deserialize, Serialize};

use crate::projection;

/// A WGS84 geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Project this point into Web Mercator.
    pub fn project(&self) -> ProjectedPoint {
        projection::wgs84_to_mercator(self)
    }
}

/// A Web Mercator (EPSG:900913) coordinate in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The four geographic corners of the map viewport at dispatch time.
///
/// Corner order is NW, NE, SE, SW throughout; the render backend and the
/// overlay image API both rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub nw: GeoPoint,
    pub ne: GeoPoint,
    pub se: GeoPoint,
    pub sw: GeoPoint,
}

impl ViewportBounds {
    pub fn new(nw: GeoPoint, ne: GeoPoint, se: GeoPoint, sw: GeoPoint) -> Self {
        Self { nw, ne, se, sw }
    }

    /// Build the bounds from a west/south/east/north bounding box.
    pub fn from_edges(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            nw: GeoPoint::new(west, north),
            ne: GeoPoint::new(east, north),
            se: GeoPoint::new(east, south),
            sw: GeoPoint::new(west, south),
        }
    }

    /// Corners in NW, NE, SE, SW order.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [self.nw, self.ne, self.se, self.sw]
    }

    /// Project all four corners into Web Mercator, preserving order.
    pub fn project(&self) -> ProjectedBounds {
        ProjectedBounds {
            nw: self.nw.project(),
            ne: self.ne.project(),
            se: self.se.project(),
            sw: self.sw.project(),
        }
    }
}

/// The viewport corners in Web Mercator, owned by the render cycle that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedBounds {
    pub nw: ProjectedPoint,
    pub ne: ProjectedPoint,
    pub se: ProjectedPoint,
    pub sw: ProjectedPoint,
}

impl ProjectedBounds {
    /// Corners in NW, NE, SE, SW order as `[x, y]` pairs.
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.nw.x, self.nw.y],
            [self.ne.x, self.ne.y],
            [self.se.x, self.se.y],
            [self.sw.x, self.sw.y],
        ]
    }

    /// The horizontal render domain: west to east.
    pub fn x_domain(&self) -> [f64; 2] {
        [self.nw.x, self.se.x]
    }

    /// The vertical render domain: south to north.
    ///
    /// Inverted relative to corner order because image y grows downward
    /// while projected y grows upward.
    pub fn y_domain(&self) -> [f64; 2] {
        [self.se.y, self.nw.y]
    }
}
