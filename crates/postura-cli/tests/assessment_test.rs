//! Integration tests for postura-checker assessment

use std::path::PathBuf;

use tempfile::tempdir;

use postura_app::assessment::{assess_marked_photo, AssessmentOptions, MarkedPhoto};
use postura_app::export::export_to_csv;
use postura_app::scanner::scan_directory;
use postura_domain::landmarks::{
    C7, CHIN, LEFT_ANKLE, LEFT_EAR, LEFT_HIP, LEFT_ILIAC_CREST, LEFT_KNEE, LEFT_SHOULDER,
    PELVIS_CENTER, RIGHT_ANKLE, RIGHT_EAR, RIGHT_HIP, RIGHT_ILIAC_CREST, RIGHT_KNEE,
    RIGHT_SHOULDER, TOP_OF_HEAD,
};
use postura_domain::{calculate_all, Point, PointSet};
use postura_types::{AssessmentEntry, MeasurementType, PhotoType, Severity};

fn pt(x: f64, y: f64, label: &str) -> Point {
    Point::new(x, y, label)
}

/// Front marking with one planted deviation: the right shoulder sits
/// noticeably lower than the left, everything else is well aligned
fn dropped_shoulder_marking() -> Vec<Point> {
    vec![
        pt(0.50, 0.05, TOP_OF_HEAD),
        pt(0.50, 0.15, CHIN),
        pt(0.45, 0.10, LEFT_EAR),
        pt(0.55, 0.10, RIGHT_EAR),
        pt(0.35, 0.40, LEFT_SHOULDER),
        pt(0.55, 0.45, RIGHT_SHOULDER),
        pt(0.50, 0.22, C7),
        pt(0.50, 0.50, PELVIS_CENTER),
        pt(0.42, 0.48, LEFT_ILIAC_CREST),
        pt(0.58, 0.48, RIGHT_ILIAC_CREST),
        pt(0.42, 0.52, LEFT_HIP),
        pt(0.58, 0.52, RIGHT_HIP),
        pt(0.41, 0.70, LEFT_KNEE),
        pt(0.59, 0.70, RIGHT_KNEE),
        pt(0.42, 0.88, LEFT_ANKLE),
        pt(0.58, 0.88, RIGHT_ANKLE),
    ]
}

fn write_marked_photo(dir: &tempfile::TempDir, name: &str, photo: &MarkedPhoto) -> PathBuf {
    let path = dir.path().join(name);
    let content = serde_json::to_string_pretty(photo).expect("Failed to serialize marked photo");
    std::fs::write(&path, content).expect("Failed to write point file");
    path
}

/// Test that a fully marked front photo runs the whole battery
#[test]
fn test_front_assessment_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let marked = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points: dropped_shoulder_marking(),
    };
    let path = write_marked_photo(&dir, "cliente_frente.json", &marked);

    let entry =
        assess_marked_photo(&path, &AssessmentOptions::new()).expect("Assessment should succeed");

    assert_eq!(entry.photo_type, PhotoType::Front);
    assert_eq!(entry.results.len(), 8);

    // Results come back in battery order, not marking order
    let order: Vec<MeasurementType> = entry.results.iter().map(|r| r.measurement_type).collect();
    assert_eq!(order, MeasurementType::ALL.to_vec());

    for result in &entry.results {
        if result.measurement_type == MeasurementType::ShouldersHorizontalLevel {
            assert!((result.value - 14.04).abs() < 0.01);
            assert_eq!(result.status, Severity::Severe);
        } else {
            assert_eq!(
                result.status,
                Severity::Acceptable,
                "{}",
                result.measurement_type
            );
        }
    }

    // Legs are symmetric: both chains bend the same amount
    let knees = entry
        .results
        .iter()
        .find(|r| r.measurement_type == MeasurementType::KneesValgusVarusSymmetry)
        .expect("Knee symmetry should be present");
    assert!((knees.value - 0.0).abs() < 0.01);
    assert!((knees.left_value.expect("left leg measured") - 6.36).abs() < 0.01);
    assert!((knees.right_value.expect("right leg measured") - 6.36).abs() < 0.01);
}

/// Test that a saved assessment survives a JSON round trip
#[test]
fn test_saved_assessment_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let marked = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points: dropped_shoulder_marking(),
    };
    let path = write_marked_photo(&dir, "cliente_frente.json", &marked);

    let entry =
        assess_marked_photo(&path, &AssessmentOptions::new()).expect("Assessment should succeed");

    let json = serde_json::to_string_pretty(&entry).expect("Entry should serialize");
    assert!(json.contains("\"measurementType\""));
    assert!(json.contains("\"shoulders_horizontal_level\""));
    assert!(json.contains("\"severe\""));

    let back: AssessmentEntry = serde_json::from_str(&json).expect("Entry should parse back");
    assert_eq!(back.source_path, entry.source_path);
    assert_eq!(back.photo_type, entry.photo_type);
    assert_eq!(back.results, entry.results);
}

/// Test that a partial marking yields the measurements it can support
#[test]
fn test_partial_marking_assesses_what_it_can() {
    let dir = tempdir().expect("Failed to create temp dir");
    let marked = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points: vec![pt(0.50, 0.08, TOP_OF_HEAD), pt(0.52, 0.18, CHIN)],
    };
    let path = write_marked_photo(&dir, "so_cabeca.json", &marked);

    let entry =
        assess_marked_photo(&path, &AssessmentOptions::new()).expect("Assessment should succeed");

    assert_eq!(entry.results.len(), 1);
    let head = &entry.results[0];
    assert_eq!(head.measurement_type, MeasurementType::HeadVerticalAlignment);
    assert!((head.value - 11.31).abs() < 0.01);
    assert_eq!(head.status, Severity::Severe);
}

/// Test that untagged files fall back to the caller's default view
#[test]
fn test_untagged_file_uses_default_view() {
    let dir = tempdir().expect("Failed to create temp dir");
    let marked = MarkedPhoto {
        photo_type: None,
        points: vec![pt(0.5, 0.1, TOP_OF_HEAD), pt(0.5, 0.3, C7)],
    };
    let path = write_marked_photo(&dir, "sem_vista.json", &marked);

    let options = AssessmentOptions::new().with_default_view(Some(PhotoType::Back));
    let entry = assess_marked_photo(&path, &options).expect("Assessment should succeed");

    assert_eq!(entry.photo_type, PhotoType::Back);
    // No calculator pairs the head top with C7
    assert!(entry.results.is_empty());
}

/// Test scanning a folder and assessing every point file in it
#[test]
fn test_scan_and_assess_folder() {
    let dir = tempdir().expect("Failed to create temp dir");

    let front = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points: dropped_shoulder_marking(),
    };
    write_marked_photo(&dir, "a_frente.json", &front);

    let back = MarkedPhoto {
        photo_type: Some(PhotoType::Back),
        points: vec![
            pt(0.30, 0.40, LEFT_SHOULDER),
            pt(0.50, 0.45, RIGHT_SHOULDER),
        ],
    };
    write_marked_photo(&dir, "b_costas.json", &back);

    std::fs::write(dir.path().join("notas.txt"), "sem pontos").expect("Failed to write notes");

    let files = scan_directory(dir.path()).expect("Scan should succeed");
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a_frente.json"));
    assert!(files[1].ends_with("b_costas.json"));

    let options = AssessmentOptions::new();
    let entries: Vec<AssessmentEntry> = files
        .iter()
        .map(|file| assess_marked_photo(file, &options).expect("Assessment should succeed"))
        .collect();

    assert_eq!(entries[0].photo_type, PhotoType::Front);
    assert_eq!(entries[0].results.len(), 8);
    assert_eq!(entries[1].photo_type, PhotoType::Back);
    assert_eq!(entries[1].results.len(), 1);
    assert_eq!(entries[1].results[0].status, Severity::Severe);
}

/// Test that the exported CSV carries one row per measurement
#[test]
fn test_export_csv_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let marked = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points: dropped_shoulder_marking(),
    };
    let path = write_marked_photo(&dir, "cliente_frente.json", &marked);

    let entry =
        assess_marked_photo(&path, &AssessmentOptions::new()).expect("Assessment should succeed");

    let csv_path = dir.path().join("avaliacao.csv");
    export_to_csv(&entry, &csv_path).expect("Export should succeed");

    let content = std::fs::read_to_string(&csv_path).expect("CSV should be readable");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        "source,photo_type,measurement,value_deg,left_deg,right_deg,status"
    );
    assert!(content.contains("shoulders_horizontal_level"));
    assert!(content.contains("14.04"));
    assert!(content.contains("severe"));
    // Bilateral columns carry the per-leg deviations
    assert!(content.contains("6.36"));
}

/// Test that a degenerate marking survives save, reload, and export
#[test]
fn test_degenerate_knee_survives_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");

    // Left hip marked on top of the knee: the left leg chain collapses
    // and its knee angle is NaN
    let mut points = dropped_shoulder_marking();
    points.retain(|p| p.label != LEFT_HIP);
    points.push(pt(0.41, 0.70, LEFT_HIP));

    let marked = MarkedPhoto {
        photo_type: Some(PhotoType::Front),
        points,
    };
    let path = write_marked_photo(&dir, "quadril_no_joelho.json", &marked);

    let entry =
        assess_marked_photo(&path, &AssessmentOptions::new()).expect("Assessment should succeed");

    let json = serde_json::to_string_pretty(&entry).expect("Entry should serialize");
    assert!(json.contains("\"value\": null"));

    let back: AssessmentEntry = serde_json::from_str(&json).expect("Entry should parse back");
    assert_eq!(back.results.len(), entry.results.len());

    let knees = back
        .results
        .iter()
        .find(|r| r.measurement_type == MeasurementType::KneesValgusVarusSymmetry)
        .expect("Knee symmetry should be present");
    assert!(knees.value.is_nan());
    assert_eq!(knees.status, Severity::Acceptable);
    assert!((knees.right_value.expect("right leg measured") - 6.36).abs() < 0.01);

    // Reloaded entries export like fresh ones
    let csv_path = dir.path().join("degenerado.csv");
    export_to_csv(&back, &csv_path).expect("Export should succeed");
    let content = std::fs::read_to_string(&csv_path).expect("CSV should be readable");
    assert!(content.contains("NaN"));
}

/// Test that marking UI edits flow straight into the battery
#[test]
fn test_point_set_edits_feed_battery() {
    let mut set = PointSet::new();
    set.place(0.30, 0.40, LEFT_SHOULDER);
    set.place(0.50, 0.45, RIGHT_SHOULDER);

    let results = calculate_all(set.points(), PhotoType::Front);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, Severity::Severe);

    // Drag the right shoulder level with the left one
    set.place(0.50, 0.40, RIGHT_SHOULDER);
    let results = calculate_all(set.points(), PhotoType::Front);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, Severity::Acceptable);
    assert!((results[0].value - 0.0).abs() < 0.01);
}
