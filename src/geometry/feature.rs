use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FeatureError;
use crate::math::Point2;

/// Property key holding a road's vertex count.
pub const NUM_VERTICES_KEY: &str = "num_vertices";

/// A GeoJSON-like road feature: line geometry plus free-form properties.
///
/// Keys other than `geometry` and `properties` (such as `"type"`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadFeature {
    pub geometry: FeatureGeometry,
    pub properties: Map<String, Value>,
}

/// Geometry part of a [`RoadFeature`].
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureGeometry {
    pub coordinates: Vec<Vec<f64>>,
}

/// A GeoJSON-like collection of road features.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<RoadFeature>,
}

impl RoadFeature {
    /// Parses a feature from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Json`] if required keys are missing or mistyped.
    pub fn from_value(value: &Value) -> Result<Self, FeatureError> {
        Ok(Self::deserialize(value)?)
    }

    /// Returns the geometry as planar points.
    ///
    /// Components past the second one are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::ShortCoordinate`] for a point with fewer than
    /// two components.
    pub fn points(&self) -> Result<Vec<Point2>, FeatureError> {
        self.geometry
            .coordinates
            .iter()
            .enumerate()
            .map(|(position, c)| match c.as_slice() {
                [x, y, ..] => Ok(Point2::new(*x, *y)),
                _ => Err(FeatureError::ShortCoordinate {
                    position,
                    dims: c.len(),
                }),
            })
            .collect()
    }

    /// Returns the `num_vertices` property.
    ///
    /// # Errors
    ///
    /// Returns an error if the property is missing or not a non-negative
    /// integer. Integral floats such as `4.0` are accepted.
    pub fn num_vertices(&self) -> Result<usize, FeatureError> {
        let value = self
            .properties
            .get(NUM_VERTICES_KEY)
            .ok_or(FeatureError::MissingProperty(NUM_VERTICES_KEY))?;
        value
            .as_u64()
            .or_else(|| value.as_f64().and_then(integral_count))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| FeatureError::InvalidProperty {
                key: NUM_VERTICES_KEY,
                value: value.clone(),
            })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn integral_count(x: f64) -> Option<u64> {
    // u64::MAX as f64 rounds up to 2^64, hence the strict bound.
    let integral = x.is_finite() && x >= 0.0 && x.fract() == 0.0;
    (integral && x < u64::MAX as f64).then_some(x as u64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(coordinates: &Value, properties: &Value) -> RoadFeature {
        RoadFeature::from_value(&json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coordinates },
            "properties": properties,
        }))
        .unwrap()
    }

    #[test]
    fn points_drop_altitude() {
        let f = feature(&json!([[1.0, 2.0, 30.0], [3.0, 4.0]]), &json!({"num_vertices": 2}));
        let pts = f.points().unwrap();
        assert_eq!(pts, vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn short_coordinate_is_rejected() {
        let f = feature(&json!([[1.0, 2.0], [3.0]]), &json!({"num_vertices": 2}));
        let err = f.points().unwrap_err();
        assert!(matches!(
            err,
            FeatureError::ShortCoordinate {
                position: 1,
                dims: 1
            }
        ));
    }

    #[test]
    fn num_vertices_missing() {
        let f = feature(&json!([]), &json!({"name": "Main St"}));
        assert!(matches!(
            f.num_vertices(),
            Err(FeatureError::MissingProperty("num_vertices"))
        ));
    }

    #[test]
    fn num_vertices_must_be_unsigned_integer() {
        let f = feature(&json!([]), &json!({"num_vertices": -3}));
        assert!(matches!(
            f.num_vertices(),
            Err(FeatureError::InvalidProperty { .. })
        ));
        let f = feature(&json!([]), &json!({"num_vertices": "four"}));
        assert!(f.num_vertices().is_err());
    }

    #[test]
    fn num_vertices_accepts_integral_float() {
        let f = feature(&json!([]), &json!({"num_vertices": 4.0}));
        assert_eq!(f.num_vertices().unwrap(), 4);
        let f = feature(&json!([]), &json!({"num_vertices": 2.5}));
        assert!(matches!(
            f.num_vertices(),
            Err(FeatureError::InvalidProperty { .. })
        ));
        let f = feature(&json!([]), &json!({"num_vertices": -1.0}));
        assert!(f.num_vertices().is_err());
    }

    #[test]
    fn missing_geometry_is_a_json_error() {
        let err = RoadFeature::from_value(&json!({"properties": {}})).unwrap_err();
        assert!(matches!(err, FeatureError::Json(_)));
    }

    #[test]
    fn collection_parses_every_feature() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"geometry": {"coordinates": [[0.0, 0.0]]}, "properties": {"num_vertices": 1}},
                {"geometry": {"coordinates": []}, "properties": {"num_vertices": 0}},
            ]
        }))
        .unwrap();
        assert_eq!(fc.features.len(), 2);
    }
}
