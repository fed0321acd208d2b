//! Assessment service - core use case for marked-photo files
//!
//! This service orchestrates the assessment workflow:
//! 1. Validate and load the point file
//! 2. Resolve which view the photo shows
//! 3. Warn about labels outside the view's vocabulary
//! 4. Run the measurement battery
//! 5. Return the assessment entry with metadata

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use postura_domain::landmarks::is_known_landmark;
use postura_domain::{calculate_all, Point};
use postura_types::{AssessmentEntry, Error, PhotoType, Result};

use crate::scanner::validate_points_file;

/// Errors specific to the assessment service
#[derive(Debug, Error)]
pub enum AssessmentServiceError {
    #[error("Point file invalid: {0}")]
    InvalidPointFile(String),

    #[error("Photo type missing for {0}")]
    MissingPhotoType(String),

    #[error("Assessment failed: {0}")]
    AssessmentFailed(String),
}

impl From<Error> for AssessmentServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::FileNotFound(msg) | Error::InvalidMarkedPhoto(msg) => {
                AssessmentServiceError::InvalidPointFile(msg)
            }
            Error::MissingPhotoType(msg) => AssessmentServiceError::MissingPhotoType(msg),
            _ => AssessmentServiceError::AssessmentFailed(err.to_string()),
        }
    }
}

/// Options for assessing a marked photo
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentOptions {
    /// Overrides the photoType recorded in the file
    pub view_override: Option<PhotoType>,

    /// Used when neither the override nor the file names a view
    pub default_view: Option<PhotoType>,
}

impl AssessmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: PhotoType) -> Self {
        self.view_override = Some(view);
        self
    }

    pub fn with_default_view(mut self, view: Option<PhotoType>) -> Self {
        self.default_view = view;
        self
    }
}

/// On-disk shape of a marked photo: the view plus the points placed
/// in the marking UI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedPhoto {
    /// View the photo was taken from; older files omit it
    #[serde(default)]
    pub photo_type: Option<PhotoType>,

    /// Marked points in marking order
    #[serde(default)]
    pub points: Vec<Point>,
}

/// Load a marked-photo file without assessing it
pub fn load_marked_photo(path: &Path) -> Result<MarkedPhoto> {
    validate_points_file(path)?;
    let content = std::fs::read_to_string(path)?;
    let marked: MarkedPhoto = serde_json::from_str(&content)
        .map_err(|e| Error::InvalidMarkedPhoto(format!("{}: {}", path.display(), e)))?;
    Ok(marked)
}

/// Main entry point: assess one marked-photo file
///
/// The view is resolved in priority order: explicit override, the
/// file's own photoType field, then the configured default. With no
/// view from any source the assessment fails.
pub fn assess_marked_photo(
    path: &Path,
    options: &AssessmentOptions,
) -> std::result::Result<AssessmentEntry, AssessmentServiceError> {
    let marked = load_marked_photo(path)?;

    let view = options
        .view_override
        .or(marked.photo_type)
        .or(options.default_view)
        .ok_or_else(|| AssessmentServiceError::MissingPhotoType(path.display().to_string()))?;

    for point in &marked.points {
        if !is_known_landmark(&point.label, view) {
            warn!(
                "{}: label \"{}\" is not in the {} vocabulary",
                path.display(),
                point.label,
                view
            );
        }
    }

    debug!(
        "assessing {} with {} points ({} view)",
        path.display(),
        marked.points.len(),
        view
    );

    let results = calculate_all(&marked.points, view);

    Ok(AssessmentEntry {
        source_path: path.display().to_string(),
        timestamp: chrono::Utc::now(),
        photo_type: view,
        results,
    })
}
