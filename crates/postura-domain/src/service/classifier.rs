//! Severity classification for measured deviations

use std::collections::HashMap;
use std::sync::LazyLock;

use postura_types::{MeasurementType, Severity};

/// Moderate and severe cutoffs in degrees for one measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityThresholds {
    pub moderate: f64,
    pub severe: f64,
}

/// Fallback cutoffs for measurement keys missing from the table
pub const DEFAULT_THRESHOLDS: SeverityThresholds = SeverityThresholds {
    moderate: 3.0,
    severe: 6.0,
};

/// Per-measurement cutoffs, keyed by wire id
pub static SEVERITY_THRESHOLDS: LazyLock<HashMap<&'static str, SeverityThresholds>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "head_vertical_alignment",
            SeverityThresholds {
                moderate: 5.0,
                severe: 10.0,
            },
        );

        m.insert(
            "head_horizontal_level",
            SeverityThresholds {
                moderate: 3.0,
                severe: 6.0,
            },
        );

        m.insert(
            "shoulders_horizontal_level",
            SeverityThresholds {
                moderate: 3.0,
                severe: 6.0,
            },
        );

        m.insert(
            "trunk_vertical_alignment",
            SeverityThresholds {
                moderate: 5.0,
                severe: 10.0,
            },
        );

        m.insert(
            "pelvis_horizontal_level",
            SeverityThresholds {
                moderate: 2.0,
                severe: 5.0,
            },
        );

        m.insert(
            "femur_horizontal_level",
            SeverityThresholds {
                moderate: 2.0,
                severe: 5.0,
            },
        );

        m.insert(
            "tibia_horizontal_level",
            SeverityThresholds {
                moderate: 3.0,
                severe: 6.0,
            },
        );

        m.insert(
            "knees_valgus_varus_symmetry",
            SeverityThresholds {
                moderate: 3.0,
                severe: 6.0,
            },
        );

        m
    });

/// Get thresholds by wire key
pub fn thresholds_for_key(key: &str) -> Option<&'static SeverityThresholds> {
    SEVERITY_THRESHOLDS.get(key)
}

/// Thresholds for a known measurement type
pub fn thresholds_for(measurement: MeasurementType) -> SeverityThresholds {
    thresholds_for_key(measurement.key())
        .copied()
        .unwrap_or(DEFAULT_THRESHOLDS)
}

/// Classify a measured deviation for a known measurement type
pub fn classify(value: f64, measurement: MeasurementType) -> Severity {
    grade(value, thresholds_for(measurement))
}

/// Classify by wire key; unknown keys fall back to the default cutoffs
pub fn classify_key(value: f64, key: &str) -> Severity {
    let thresholds = thresholds_for_key(key).copied().unwrap_or(DEFAULT_THRESHOLDS);
    grade(value, thresholds)
}

fn grade(value: f64, thresholds: SeverityThresholds) -> Severity {
    // Sign carries direction, not magnitude; NaN fails both
    // comparisons and grades as acceptable
    let deviation = value.abs();
    if deviation >= thresholds.severe {
        Severity::Severe
    } else if deviation >= thresholds.moderate {
        Severity::Moderate
    } else {
        Severity::Acceptable
    }
}
