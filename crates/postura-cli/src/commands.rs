//! Command handlers

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::Utc;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;

use postura_app::assessment::{assess_marked_photo, AssessmentOptions, AssessmentServiceError};
use postura_app::config::Config;
use postura_app::export::{export_batch_to_csv, export_to_csv};
use postura_app::scanner::scan_directory;
use postura_domain::generate_assessment_report;
use postura_domain::landmarks::landmarks_for_view;
use postura_domain::service::classifier::{classify_key, thresholds_for_key, DEFAULT_THRESHOLDS};
use postura_domain::service::BATTERY;
use postura_types::{
    AssessmentEntry, BatchResults, Error, OutputFormat, PhotoType, Result, Severity,
};

use crate::cli::{Cli, Commands};
use crate::output::output_entry;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    match &cli.command {
        Commands::Assess {
            points,
            view,
            output,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_assess(
                &cli,
                &config,
                points.clone(),
                *view,
                output.clone(),
                output_format,
            )
        }

        Commands::Batch {
            folder,
            output,
            view,
            jobs,
        } => {
            // Use CLI jobs if specified, otherwise config value. 0 = auto CPU count.
            let job_count = match jobs {
                Some(0) => num_cpus::get(),
                Some(n) => *n,
                None => config.batch_jobs.max(1),
            };
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_batch(
                &cli,
                &config,
                folder.clone(),
                output.clone(),
                *view,
                job_count,
                output_format,
            )
        }

        Commands::Landmarks { view } => cmd_landmarks(*view),

        Commands::Classify { measurement, value } => cmd_classify(measurement, *value),

        Commands::Report { results } => cmd_report(results.clone()),

        Commands::Export { results, output } => cmd_export(results.clone(), output.clone()),

        Commands::Config {
            show,
            set_output,
            set_default_view,
            set_jobs,
            reset,
        } => cmd_config(*show, *set_output, *set_default_view, *set_jobs, *reset),
    }
}

fn cmd_assess(
    cli: &Cli,
    config: &Config,
    points: PathBuf,
    view: Option<PhotoType>,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut options = AssessmentOptions::new().with_default_view(config.default_view);
    if let Some(view) = view {
        options = options.with_view(view);
    }

    if cli.verbose {
        eprintln!("Assessing point file: {}", points.display());
    }

    let entry = assess_marked_photo(&points, &options)
        .map_err(|e: AssessmentServiceError| Error::AssessmentFailed(e.to_string()))?;

    if cli.verbose {
        eprintln!(
            "{} of {} measurements computed",
            entry.results.len(),
            BATTERY.len()
        );
    }

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&entry)?;
        std::fs::write(&output_path, content)?;
        println!("Assessment saved to: {}", output_path.display());
    } else {
        output_entry(output_format, &entry)?;
    }

    Ok(())
}

/// Result from a single assessment task
#[derive(Debug)]
struct AssessmentTaskResult {
    points_path: PathBuf,
    result: std::result::Result<AssessmentEntry, String>,
}

fn cmd_batch(
    cli: &Cli,
    config: &Config,
    folder: PathBuf,
    output: Option<PathBuf>,
    view: Option<PhotoType>,
    jobs: usize,
    output_format: OutputFormat,
) -> Result<()> {
    // Scan directory
    let files = scan_directory(&folder)?;
    debug!("scanned {} point files under {}", files.len(), folder.display());

    if files.is_empty() {
        return Err(Error::FileNotFound(format!(
            "No point files found in {}",
            folder.display()
        )));
    }

    let total_files = files.len();
    if cli.verbose {
        eprintln!(
            "Found {} point files to assess with {} parallel jobs",
            total_files, jobs
        );
    }

    // In batch mode --view is a fallback for untagged files, not an
    // override; mixed folders keep their per-file photoType
    let batch_options = AssessmentOptions::new().with_default_view(view.or(config.default_view));

    // Setup progress bar
    let multi_progress = MultiProgress::new();
    let main_pb = multi_progress.add(ProgressBar::new(total_files as u64));
    main_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Shared results collector
    let results: Arc<Mutex<Vec<AssessmentTaskResult>>> = Arc::new(Mutex::new(Vec::new()));
    let files = Arc::new(files);
    let next_index = Arc::new(AtomicUsize::new(0));

    // Track timing
    let started_at = Utc::now();

    // Spawn worker threads
    let mut handles = Vec::new();
    let verbose = cli.verbose;

    for worker_id in 0..jobs {
        let files = Arc::clone(&files);
        let next_index = Arc::clone(&next_index);
        let results = Arc::clone(&results);
        let pb = main_pb.clone();

        let handle = thread::spawn(move || loop {
            // Get next file to process (lock-free)
            let idx = next_index.fetch_add(1, Ordering::SeqCst);
            if idx >= files.len() {
                break;
            }

            let points_path = &files[idx];

            // Update progress message
            let filename = points_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string();

            if verbose {
                pb.set_message(format!("[W{}] {}", worker_id, filename));
            }

            let result = assess_marked_photo(points_path, &batch_options).map_err(|e| e.to_string());

            // Store result
            {
                let mut results_guard = results.lock().unwrap();
                results_guard.push(AssessmentTaskResult {
                    points_path: points_path.clone(),
                    result,
                });
            }

            pb.inc(1);
        });

        handles.push(handle);
    }

    // Wait for all workers to complete
    for handle in handles {
        let _ = handle.join();
    }

    main_pb.finish_with_message("Complete");

    let completed_at = Utc::now();

    // Collect results
    let task_results = Arc::try_unwrap(results)
        .expect("All workers should be done")
        .into_inner()
        .unwrap();

    let mut entries = Vec::new();
    let mut successful = 0;
    let mut failed = 0;

    for task_result in task_results {
        match task_result.result {
            Ok(entry) => {
                entries.push(entry);
                successful += 1;
            }
            Err(e) => {
                if cli.verbose {
                    eprintln!(
                        "Failed to assess {}: {}",
                        task_result.points_path.display(),
                        e
                    );
                }
                failed += 1;
            }
        }
    }

    // Sort entries by source path for consistent output
    entries.sort_by(|a, b| a.source_path.cmp(&b.source_path));

    let results = BatchResults {
        entries,
        total_processed: total_files,
        successful,
        failed,
        started_at,
        completed_at,
    };

    // Output results
    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output_path, content)?;
        println!("Results saved to: {}", output_path.display());
    } else {
        let severe_total: usize = results
            .entries
            .iter()
            .flat_map(|e| &e.results)
            .filter(|r| r.status == Severity::Severe)
            .count();

        // Print summary
        println!("\nBatch Assessment Complete");
        println!("=========================");
        println!("Total:      {}", results.total_processed);
        println!("Successful: {}", results.successful);
        println!("Failed:     {}", results.failed);
        println!("Severe:     {}", severe_total);
        println!(
            "Duration:   {:.1}s",
            (results.completed_at - results.started_at).num_milliseconds() as f64 / 1000.0
        );

        if output_format == OutputFormat::Json {
            let content = serde_json::to_string_pretty(&results)?;
            println!("\n{}", content);
        }
    }

    Ok(())
}

fn cmd_landmarks(view: PhotoType) -> Result<()> {
    println!("Landmarks for {} view ({})", view.key(), view.label());
    println!("{}", "-".repeat(40));
    for label in landmarks_for_view(view) {
        println!("  {}", label);
    }
    Ok(())
}

fn cmd_classify(measurement: &str, value: f64) -> Result<()> {
    let thresholds = match thresholds_for_key(measurement) {
        Some(t) => *t,
        None => {
            eprintln!(
                "Aviso: medição desconhecida '{}', usando limites padrão",
                measurement
            );
            DEFAULT_THRESHOLDS
        }
    };
    let severity = classify_key(value, measurement);

    println!("Measurement: {}", measurement);
    println!("Value:       {:.2}°", value);
    println!(
        "Thresholds:  moderate >= {:.1}°, severe >= {:.1}°",
        thresholds.moderate, thresholds.severe
    );
    println!("Status:      {} ({})", severity.label_en(), severity.label());

    Ok(())
}

fn cmd_report(results_path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&results_path)?;
    let entry: AssessmentEntry = serde_json::from_str(&content)?;

    println!("Source:     {}", entry.source_path);
    println!(
        "View:       {} ({})",
        entry.photo_type.key(),
        entry.photo_type.label()
    );
    println!("Assessed:   {}", entry.timestamp.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", generate_assessment_report(&entry.results));

    Ok(())
}

fn cmd_export(results_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let content = std::fs::read_to_string(&results_path)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = results_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("results");
        results_path.with_file_name(format!("{}.csv", stem))
    });

    // Batch files first, falling back to a single saved entry
    if let Ok(batch) = serde_json::from_str::<BatchResults>(&content) {
        export_batch_to_csv(&batch, &output_path)?;
    } else {
        let entry: AssessmentEntry = serde_json::from_str(&content)?;
        export_to_csv(&entry, &output_path)?;
    }

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_default_view: Option<PhotoType>,
    set_jobs: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(view) = set_default_view {
        config.default_view = Some(view);
        modified = true;
    }

    if let Some(jobs) = set_jobs {
        config.batch_jobs = jobs.max(1);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
