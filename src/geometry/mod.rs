pub mod feature;
pub mod road;

pub use feature::{FeatureCollection, FeatureGeometry, RoadFeature};
pub use road::{Axis, Road};
