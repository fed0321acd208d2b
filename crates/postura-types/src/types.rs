//! Core types for postural assessment

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize null as NaN (serde_json writes non-finite floats as null)
fn null_to_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or(f64::NAN))
}

/// Which side the photo was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PhotoType {
    /// Facing the camera
    Front,
    /// Back to the camera
    Back,
    /// Photographed from the subject's left
    SideLeft,
    /// Photographed from the subject's right
    SideRight,
}

impl PhotoType {
    /// Stable string id used in JSON payloads and file names
    pub fn key(&self) -> &'static str {
        match self {
            PhotoType::Front => "front",
            PhotoType::Back => "back",
            PhotoType::SideLeft => "side_left",
            PhotoType::SideRight => "side_right",
        }
    }

    /// Get display label in Portuguese
    pub fn label(&self) -> &'static str {
        match self {
            PhotoType::Front => "Frente",
            PhotoType::Back => "Costas",
            PhotoType::SideLeft => "Lateral esquerda",
            PhotoType::SideRight => "Lateral direita",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            PhotoType::Front => "Front",
            PhotoType::Back => "Back",
            PhotoType::SideLeft => "Left side",
            PhotoType::SideRight => "Right side",
        }
    }
}

impl std::fmt::Display for PhotoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Severity band for a measured deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Within normal range
    Acceptable,
    /// Deviation worth monitoring
    Moderate,
    /// Deviation needing correction
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Acceptable => "Aceitável",
            Severity::Moderate => "Moderado",
            Severity::Severe => "Severo",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            Severity::Acceptable => "acceptable",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_en())
    }
}

/// Measurement identifiers, in battery evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    HeadVerticalAlignment,
    HeadHorizontalLevel,
    ShouldersHorizontalLevel,
    TrunkVerticalAlignment,
    PelvisHorizontalLevel,
    FemurHorizontalLevel,
    TibiaHorizontalLevel,
    KneesValgusVarusSymmetry,
}

impl MeasurementType {
    /// Every measurement, in the order the battery runs them
    pub const ALL: [MeasurementType; 8] = [
        MeasurementType::HeadVerticalAlignment,
        MeasurementType::HeadHorizontalLevel,
        MeasurementType::ShouldersHorizontalLevel,
        MeasurementType::TrunkVerticalAlignment,
        MeasurementType::PelvisHorizontalLevel,
        MeasurementType::FemurHorizontalLevel,
        MeasurementType::TibiaHorizontalLevel,
        MeasurementType::KneesValgusVarusSymmetry,
    ];

    /// Stable string id used in JSON payloads and threshold lookups
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementType::HeadVerticalAlignment => "head_vertical_alignment",
            MeasurementType::HeadHorizontalLevel => "head_horizontal_level",
            MeasurementType::ShouldersHorizontalLevel => "shoulders_horizontal_level",
            MeasurementType::TrunkVerticalAlignment => "trunk_vertical_alignment",
            MeasurementType::PelvisHorizontalLevel => "pelvis_horizontal_level",
            MeasurementType::FemurHorizontalLevel => "femur_horizontal_level",
            MeasurementType::TibiaHorizontalLevel => "tibia_horizontal_level",
            MeasurementType::KneesValgusVarusSymmetry => "knees_valgus_varus_symmetry",
        }
    }

    /// Parse a string id back into a measurement type
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }

    /// Get display label in Portuguese
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementType::HeadVerticalAlignment => "Alinhamento vertical da cabeça",
            MeasurementType::HeadHorizontalLevel => "Nivelamento horizontal da cabeça",
            MeasurementType::ShouldersHorizontalLevel => "Nivelamento horizontal dos ombros",
            MeasurementType::TrunkVerticalAlignment => "Alinhamento vertical do tronco",
            MeasurementType::PelvisHorizontalLevel => "Nivelamento horizontal da pelve",
            MeasurementType::FemurHorizontalLevel => "Nivelamento horizontal do fêmur",
            MeasurementType::TibiaHorizontalLevel => "Nivelamento horizontal da tíbia",
            MeasurementType::KneesValgusVarusSymmetry => "Simetria valgo/varo dos joelhos",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            MeasurementType::HeadVerticalAlignment => "Head vertical alignment",
            MeasurementType::HeadHorizontalLevel => "Head horizontal level",
            MeasurementType::ShouldersHorizontalLevel => "Shoulders horizontal level",
            MeasurementType::TrunkVerticalAlignment => "Trunk vertical alignment",
            MeasurementType::PelvisHorizontalLevel => "Pelvis horizontal level",
            MeasurementType::FemurHorizontalLevel => "Femur horizontal level",
            MeasurementType::TibiaHorizontalLevel => "Tibia horizontal level",
            MeasurementType::KneesValgusVarusSymmetry => "Knees valgus/varus symmetry",
        }
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One measurement produced by the battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResult {
    /// Which measurement produced this value
    pub measurement_type: MeasurementType,

    /// Deviation in degrees (sign preserved); NaN for degenerate geometry
    #[serde(deserialize_with = "null_to_nan")]
    pub value: f64,

    /// Severity band for `value`
    pub status: Severity,

    /// View the source photo was taken from
    pub photo_type: PhotoType,

    /// Left-side angle, for bilateral measurements only
    #[serde(default)]
    pub left_value: Option<f64>,

    /// Right-side angle, for bilateral measurements only
    #[serde(default)]
    pub right_value: Option<f64>,
}

/// Assessment of one marked photo, with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEntry {
    /// Marked-photo file path
    pub source_path: String,
    /// Assessment timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// View the photo was taken from
    pub photo_type: PhotoType,
    /// Measurements the battery could compute
    pub results: Vec<MeasurementResult>,
}

/// Batch assessment results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResults {
    /// Assessment entries
    pub entries: Vec<AssessmentEntry>,
    /// Total files processed
    pub total_processed: usize,
    /// Number of successful assessments
    pub successful: usize,
    /// Number of failed assessments
    pub failed: usize,
    /// Batch start time
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// Batch end time
    pub completed_at: chrono::DateTime<chrono::Utc>,
}
