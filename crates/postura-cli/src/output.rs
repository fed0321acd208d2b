//! Result output formatting

use postura_domain::generate_assessment_report;
use postura_types::{AssessmentEntry, OutputFormat, Result, Severity};

/// Print an assessment entry in the requested format
pub fn output_entry(format: OutputFormat, entry: &AssessmentEntry) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(entry)?;
            println!("{}", content);
        }
        OutputFormat::Table => {
            let severe = entry
                .results
                .iter()
                .filter(|r| r.status == Severity::Severe)
                .count();
            let moderate = entry
                .results
                .iter()
                .filter(|r| r.status == Severity::Moderate)
                .count();

            println!("Assessment Result");
            println!("=================");
            println!("Source:   {}", entry.source_path);
            println!(
                "View:     {} ({})",
                entry.photo_type.key(),
                entry.photo_type.label()
            );
            println!("Assessed: {}", entry.timestamp.format("%Y-%m-%d %H:%M"));
            println!("Findings: {} severe, {} moderate", severe, moderate);
            println!();
            println!("{}", generate_assessment_report(&entry.results));
        }
    }
    Ok(())
}
