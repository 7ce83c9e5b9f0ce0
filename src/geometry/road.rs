use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{FeatureError, RoadError};
use crate::geometry::feature::{FeatureCollection, RoadFeature};
use crate::math::Point2;

/// Planar coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    /// Returns the component index of this axis within a point.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = RoadError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            n => Err(RoadError::InvalidAxis(n)),
        }
    }
}

/// A road polyline with per-axis exaggeration.
///
/// The original coordinates are kept untouched; [`Road::exaggerate_axis`]
/// always rebuilds the working coordinates from them, so scaling never
/// accumulates.
#[derive(Debug, Clone)]
pub struct Road {
    coordinates: Vec<Point2>,
    original_coordinates: Vec<Point2>,
    properties: Map<String, Value>,
    num_vertices: usize,
    exaggeration: [f64; 2],
}

impl Road {
    /// Builds a road from a parsed feature record.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate has fewer than two components or the
    /// `num_vertices` property is missing or invalid.
    pub fn from_feature(feature: RoadFeature) -> Result<Self, FeatureError> {
        let original_coordinates = feature.points()?;
        let num_vertices = feature.num_vertices()?;
        Ok(Self {
            coordinates: original_coordinates.clone(),
            original_coordinates,
            properties: feature.properties,
            num_vertices,
            exaggeration: [0.0; 2],
        })
    }

    /// Builds a road from a JSON feature value.
    ///
    /// # Errors
    ///
    /// See [`Road::from_feature`]; also fails on a malformed record.
    pub fn from_value(value: &Value) -> Result<Self, FeatureError> {
        Self::from_feature(RoadFeature::from_value(value)?)
    }

    /// Builds a road from a JSON feature document.
    ///
    /// # Errors
    ///
    /// See [`Road::from_value`].
    pub fn from_json_str(json: &str) -> Result<Self, FeatureError> {
        Self::from_feature(serde_json::from_str(json)?)
    }

    /// Builds every road of a JSON feature collection document.
    ///
    /// # Errors
    ///
    /// Fails on the first feature that cannot be turned into a road.
    pub fn collection_from_json_str(json: &str) -> Result<Vec<Self>, FeatureError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let roads = collection
            .features
            .into_iter()
            .map(Self::from_feature)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(roads = roads.len(), "loaded feature collection");
        Ok(roads)
    }

    /// Working (possibly exaggerated) coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[Point2] {
        &self.coordinates
    }

    /// Coordinates as read from the feature.
    #[must_use]
    pub fn original_coordinates(&self) -> &[Point2] {
        &self.original_coordinates
    }

    #[must_use]
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Last factor applied along `axis` (`0.0` before any exaggeration).
    #[must_use]
    pub fn exaggeration(&self, axis: Axis) -> f64 {
        self.exaggeration[axis.index()]
    }

    /// Scales the original coordinates along `axis` by `factor`.
    ///
    /// Does nothing if `factor` equals the factor last applied on that axis.
    /// Otherwise the working coordinates are reset to the originals before
    /// scaling, which also discards an earlier exaggeration of the other axis
    /// (its cached factor is left as is).
    pub fn exaggerate_axis(&mut self, axis: Axis, factor: f64) {
        let i = axis.index();
        #[allow(clippy::float_cmp)]
        let unchanged = self.exaggeration[i] == factor;
        if unchanged {
            return;
        }
        self.coordinates.clone_from(&self.original_coordinates);
        for p in &mut self.coordinates {
            p[i] *= factor;
        }
        self.exaggeration[i] = factor;
        trace!(?axis, factor, points = self.coordinates.len(), "exaggerated road");
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Road with {} vertices", self.num_vertices)
    }
}
