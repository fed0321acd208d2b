//! Postural measurement battery
//!
//! Every calculator has the same shape: find its landmarks in the
//! point slice, measure, classify. A missing landmark skips that
//! measurement instead of failing the whole battery, so partially
//! marked photos still yield whatever can be computed.

use log::debug;

use postura_types::{MeasurementResult, MeasurementType, PhotoType};

use crate::landmarks::{
    C7, CHIN, LEFT_ANKLE, LEFT_EAR, LEFT_HIP, LEFT_ILIAC_CREST, LEFT_KNEE, LEFT_SHOULDER,
    PELVIS_CENTER, RIGHT_ANKLE, RIGHT_EAR, RIGHT_HIP, RIGHT_ILIAC_CREST, RIGHT_KNEE,
    RIGHT_SHOULDER, TOP_OF_HEAD,
};
use crate::model::Point;
use crate::service::angles::{horizontal_level, knee_deviation_angle, vertical_alignment};
use crate::service::classifier::classify;

/// Calculator signature shared by the whole battery
pub type Calculator = fn(&[Point], PhotoType) -> Option<MeasurementResult>;

/// The full battery, in the order results are reported
pub const BATTERY: [Calculator; 8] = [
    head_vertical_alignment,
    head_horizontal_level,
    shoulders_horizontal_level,
    trunk_vertical_alignment,
    pelvis_horizontal_level,
    femur_horizontal_level,
    tibia_horizontal_level,
    knees_valgus_varus_symmetry,
];

/// Run every calculator, keeping the measurements that had their landmarks
pub fn calculate_all(points: &[Point], photo: PhotoType) -> Vec<MeasurementResult> {
    let results: Vec<MeasurementResult> = BATTERY
        .iter()
        .filter_map(|calculator| calculator(points, photo))
        .collect();
    debug!(
        "battery produced {}/{} measurements for {} view",
        results.len(),
        BATTERY.len(),
        photo
    );
    results
}

pub fn head_vertical_alignment(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let top = find_point(points, TOP_OF_HEAD)?;
    let chin = find_point(points, CHIN)?;
    Some(simple_result(
        MeasurementType::HeadVerticalAlignment,
        vertical_alignment(top, chin),
        photo,
    ))
}

pub fn head_horizontal_level(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = find_point(points, LEFT_EAR)?;
    let right = find_point(points, RIGHT_EAR)?;
    Some(simple_result(
        MeasurementType::HeadHorizontalLevel,
        horizontal_level(left, right),
        photo,
    ))
}

pub fn shoulders_horizontal_level(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = find_point(points, LEFT_SHOULDER)?;
    let right = find_point(points, RIGHT_SHOULDER)?;
    Some(simple_result(
        MeasurementType::ShouldersHorizontalLevel,
        horizontal_level(left, right),
        photo,
    ))
}

pub fn trunk_vertical_alignment(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let neck = find_point(points, C7)?;
    let pelvis = find_point(points, PELVIS_CENTER)?;
    Some(simple_result(
        MeasurementType::TrunkVerticalAlignment,
        vertical_alignment(neck, pelvis),
        photo,
    ))
}

pub fn pelvis_horizontal_level(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = find_point(points, LEFT_ILIAC_CREST)?;
    let right = find_point(points, RIGHT_ILIAC_CREST)?;
    Some(simple_result(
        MeasurementType::PelvisHorizontalLevel,
        horizontal_level(left, right),
        photo,
    ))
}

/// Femur level is read at the knees, the bone's distal ends
pub fn femur_horizontal_level(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = find_point(points, LEFT_KNEE)?;
    let right = find_point(points, RIGHT_KNEE)?;
    Some(simple_result(
        MeasurementType::FemurHorizontalLevel,
        horizontal_level(left, right),
        photo,
    ))
}

/// Tibia level is read at the ankles
pub fn tibia_horizontal_level(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = find_point(points, LEFT_ANKLE)?;
    let right = find_point(points, RIGHT_ANKLE)?;
    Some(simple_result(
        MeasurementType::TibiaHorizontalLevel,
        horizontal_level(left, right),
        photo,
    ))
}

/// Bilateral measurement: compares the two leg chains
///
/// The reported value is the left deviation minus the right one, so a
/// symmetric pair of legs scores near zero even when both knees bend.
pub fn knees_valgus_varus_symmetry(points: &[Point], photo: PhotoType) -> Option<MeasurementResult> {
    let left = knee_deviation_angle(
        find_point(points, LEFT_HIP)?,
        find_point(points, LEFT_KNEE)?,
        find_point(points, LEFT_ANKLE)?,
    );
    let right = knee_deviation_angle(
        find_point(points, RIGHT_HIP)?,
        find_point(points, RIGHT_KNEE)?,
        find_point(points, RIGHT_ANKLE)?,
    );
    let value = left - right;
    Some(MeasurementResult {
        measurement_type: MeasurementType::KneesValgusVarusSymmetry,
        value,
        status: classify(value, MeasurementType::KneesValgusVarusSymmetry),
        photo_type: photo,
        left_value: Some(left),
        right_value: Some(right),
    })
}

/// First point carrying the exact label; marking order resolves duplicates
fn find_point<'a>(points: &'a [Point], label: &str) -> Option<&'a Point> {
    points.iter().find(|p| p.label == label)
}

fn simple_result(
    measurement: MeasurementType,
    value: f64,
    photo: PhotoType,
) -> MeasurementResult {
    MeasurementResult {
        measurement_type: measurement,
        value,
        status: classify(value, measurement),
        photo_type: photo,
        left_value: None,
        right_value: None,
    }
}
