use serde::{Deserialize, Serialize};

/// A labeled landmark marked on a photo
///
/// Coordinates are normalized to the image: both axes run 0.0-1.0,
/// origin at the top-left corner, y growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position as a fraction of image width
    pub x: f64,
    /// Vertical position as a fraction of image height
    pub y: f64,
    /// Anatomical label, e.g. "Ombro esquerdo"
    pub label: String,
}

impl Point {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// Points marked on one photo, in marking order
///
/// Labels are unique within a set: marking a label again replaces the
/// existing point without changing its position in the order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a point, or move the existing point with the same label
    pub fn place(&mut self, x: f64, y: f64, label: impl Into<String>) {
        let label = label.into();
        match self.points.iter_mut().find(|p| p.label == label) {
            Some(existing) => {
                existing.x = x;
                existing.y = y;
            }
            None => self.points.push(Point { x, y, label }),
        }
    }

    /// Remove the point with this label, reporting whether it existed
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.label != label);
        self.points.len() < before
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Linear scan by exact label; sets stay under two dozen points
    pub fn get(&self, label: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
