use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::VertexError;
use crate::math::{round_to, DVector};

/// Untyped vertex record as it arrives from JSON.
///
/// `properties` may hold any JSON value; conversion into a [`Vertex`] checks
/// that each entry is a number. Booleans count as numbers (`0.0` / `1.0`).
#[derive(Debug, Clone, Deserialize)]
pub struct VertexRecord {
    pub index: usize,
    pub road_index: usize,
    pub coords: Vec<f64>,
    pub translation_vector: Vec<f64>,
    pub properties: Vec<Value>,
    #[serde(default)]
    pub connections: Vec<usize>,
}

/// A graph vertex on a road.
///
/// `properties` is the derived attribute vector
/// `coords ++ input properties ++ translation_vector`, not the input list.
#[derive(Debug, Clone)]
pub struct Vertex {
    index: usize,
    road_index: usize,
    coords: Vec<f64>,
    translation_vector: Vec<f64>,
    properties: DVector,
    connections: Vec<usize>,
}

impl Vertex {
    /// Creates a vertex from numeric inputs.
    #[must_use]
    pub fn new(
        index: usize,
        road_index: usize,
        coords: &[f64],
        translation_vector: &[f64],
        properties: &[f64],
        connections: Vec<usize>,
    ) -> Self {
        let attributes = DVector::from_iterator(
            coords.len() + properties.len() + translation_vector.len(),
            coords
                .iter()
                .chain(properties)
                .chain(translation_vector)
                .copied(),
        );
        Self {
            index,
            road_index,
            coords: coords.to_vec(),
            translation_vector: translation_vector.to_vec(),
            properties: attributes,
            connections,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the road this vertex belongs to.
    #[must_use]
    pub fn road_index(&self) -> usize {
        self.road_index
    }

    #[must_use]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    #[must_use]
    pub fn translation_vector(&self) -> &[f64] {
        &self.translation_vector
    }

    /// Derived attribute vector: coordinates, input properties, translation.
    #[must_use]
    pub fn properties(&self) -> &DVector {
        &self.properties
    }

    /// Indices of the vertices this one links to. Not checked against any graph.
    #[must_use]
    pub fn connections(&self) -> &[usize] {
        &self.connections
    }
}

impl TryFrom<VertexRecord> for Vertex {
    type Error = VertexError;

    fn try_from(record: VertexRecord) -> Result<Self, Self::Error> {
        let properties = record
            .properties
            .into_iter()
            .enumerate()
            .map(|(position, value)| match value {
                Value::Bool(flag) => Ok(f64::from(u8::from(flag))),
                _ => value
                    .as_f64()
                    .ok_or(VertexError::NonNumericProperty { position, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            record.index,
            record.road_index,
            &record.coords,
            &record.translation_vector,
            &properties,
            record.connections,
        ))
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded: Vec<f64> = self.coords.iter().map(|c| round_to(*c, 2)).collect();
        let attributes: Vec<f64> = self.properties.iter().copied().collect();
        writeln!(f, "Vertex {}", self.index)?;
        writeln!(f, "Coordinates: {rounded:?}")?;
        writeln!(f, "Connections: {:?}", self.connections)?;
        write!(f, "Attributes: {attributes:?}")
    }
}
