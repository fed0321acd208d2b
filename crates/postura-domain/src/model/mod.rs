//! Domain model types

pub mod point;

pub use point::{Point, PointSet};
