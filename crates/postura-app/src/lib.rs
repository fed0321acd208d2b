//! Application service layer - use cases, config, scanning, export

pub mod assessment;
pub mod config;
pub mod export;
pub mod scanner;

pub use assessment::{assess_marked_photo, load_marked_photo, AssessmentOptions, MarkedPhoto};
pub use config::Config;
