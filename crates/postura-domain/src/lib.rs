//! Domain model and measurement services for postural assessment

pub mod landmarks;
pub mod model;
pub mod service;

pub use model::{Point, PointSet};
pub use service::{calculate_all, generate_assessment_report};
