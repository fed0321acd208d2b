//! Assessment report rendering

use postura_types::{MeasurementResult, Severity};

pub fn generate_assessment_report(results: &[MeasurementResult]) -> String {
    let total = results.len();
    let severe_count = results.iter().filter(|r| r.status == Severity::Severe).count();
    let moderate_count = results
        .iter()
        .filter(|r| r.status == Severity::Moderate)
        .count();
    let acceptable_count = total - severe_count - moderate_count;
    let deviated_count = severe_count + moderate_count;

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Relatório de Avaliação Postural          \n");
    report.push_str("           Postural Assessment Report              \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Resumo / Summary]\n");
    report.push_str(&format!("  Total de medições / Measurements:   {}\n", total));
    report.push_str(&format!("  Aceitáveis / Acceptable:            {}\n", acceptable_count));
    report.push_str(&format!("  Moderados / Moderate:               {}\n", moderate_count));
    report.push_str(&format!("  Severos / Severe:                   {}\n", severe_count));
    if total > 0 {
        let deviation_rate = (deviated_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Fora do aceitável / Deviated:       {:.1}%\n", deviation_rate));
    }
    if let Some(worst) = results
        .iter()
        .filter(|r| r.status != Severity::Acceptable)
        .max_by(|a, b| a.value.abs().total_cmp(&b.value.abs()))
    {
        report.push_str(&format!(
            "  Maior desvio / Worst:               {} ({:.1}°)\n",
            worst.measurement_type.label(),
            worst.value
        ));
    }
    report.push('\n');

    if deviated_count > 0 {
        report.push_str("[Desvios encontrados / Deviations]\n");
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        push_table_header(&mut report);
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| r.status != Severity::Acceptable) {
            push_table_row(&mut report, result);
        }
        report.push('\n');
    } else if total > 0 {
        report.push_str("[Sem desvios / No Deviations]\n");
        report.push_str("  Todas as medições estão dentro da faixa aceitável.\n");
        report.push_str("  All measurements are within the acceptable range.\n\n");
    }

    if total > 0 {
        report.push_str("[Medições / Measurements]\n");
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        push_table_header(&mut report);
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        for result in results {
            push_table_row(&mut report, result);
        }
        report.push('\n');
    } else {
        report.push_str("[Sem medições / No Measurements]\n");
        report.push_str("  Nenhum conjunto de pontos necessário foi marcado.\n");
        report.push_str("  No required landmark set was marked.\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn push_table_header(report: &mut String) {
    report.push_str(&format!(
        "{:<34} {:>8} {:>8} {:>8} {:>10}\n",
        "Medição", "Valor", "Esq.", "Dir.", "Grau"
    ));
    report.push_str(&format!(
        "{:<34} {:>8} {:>8} {:>8} {:>10}\n",
        "Measurement", "Value", "Left", "Right", "Grade"
    ));
}

fn push_table_row(report: &mut String, result: &MeasurementResult) {
    let left = result
        .left_value
        .map(|v| format!("{:.1}°", v))
        .unwrap_or_else(|| "-".to_string());
    let right = result
        .right_value
        .map(|v| format!("{:.1}°", v))
        .unwrap_or_else(|| "-".to_string());
    report.push_str(&format!(
        "{:<34} {:>7.1}° {:>8} {:>8} {:>10}\n",
        truncate_str(result.measurement_type.label(), 33),
        result.value,
        left,
        right,
        result.status.label()
    ));
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
