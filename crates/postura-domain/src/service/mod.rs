//! Domain services

pub mod angles;
pub mod calculators;
pub mod classifier;
pub mod report;

pub use calculators::{calculate_all, Calculator, BATTERY};
pub use classifier::{classify, classify_key, SeverityThresholds};
pub use report::generate_assessment_report;
