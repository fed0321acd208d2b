//! CSV export functionality

use postura_types::{AssessmentEntry, BatchResults, Error, Result};
use std::path::Path;

/// Export a single assessment to a CSV file
pub fn export_to_csv(entry: &AssessmentEntry, output_path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(output_path).map_err(|e| Error::Export(e.to_string()))?;

    write_header(&mut writer)?;
    write_entry_rows(&mut writer, entry)?;

    writer.flush()?;
    Ok(())
}

/// Export batch results to a CSV file, one row per measurement
pub fn export_batch_to_csv(results: &BatchResults, output_path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(output_path).map_err(|e| Error::Export(e.to_string()))?;

    write_header(&mut writer)?;
    for entry in &results.entries {
        write_entry_rows(&mut writer, entry)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_header(writer: &mut csv::Writer<std::fs::File>) -> Result<()> {
    writer
        .write_record([
            "source",
            "photo_type",
            "measurement",
            "value_deg",
            "left_deg",
            "right_deg",
            "status",
        ])
        .map_err(|e| Error::Export(e.to_string()))?;
    Ok(())
}

fn write_entry_rows(writer: &mut csv::Writer<std::fs::File>, entry: &AssessmentEntry) -> Result<()> {
    for result in &entry.results {
        let value = format_degrees(result.value);
        let left = result.left_value.map(format_degrees).unwrap_or_default();
        let right = result.right_value.map(format_degrees).unwrap_or_default();
        writer
            .write_record([
                entry.source_path.as_str(),
                entry.photo_type.key(),
                result.measurement_type.key(),
                value.as_str(),
                left.as_str(),
                right.as_str(),
                result.status.label_en(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }
    Ok(())
}

fn format_degrees(value: f64) -> String {
    format!("{:.2}", value)
}
