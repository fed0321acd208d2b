//! CLI definition using clap

use clap::{Parser, Subcommand};
use postura_types::{OutputFormat, PhotoType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postura-checker")]
#[command(author = "rafael")]
#[command(version)]
#[command(about = "Postural deviation measurement from marked photos")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a single marked-photo file
    Assess {
        /// Path to the point file saved by the marking UI
        points: PathBuf,

        /// View the photo was taken from; overrides the file's photoType
        #[arg(long)]
        view: Option<PhotoType>,

        /// Save the assessment entry as JSON instead of printing it
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Batch assess point files in a folder
    Batch {
        /// Path to folder containing point files
        folder: PathBuf,

        /// Output file for results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// View assumed for files without a photoType field
        #[arg(long)]
        view: Option<PhotoType>,

        /// Number of parallel assessments. 0 = auto (CPU count). Uses config value if not specified.
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
    },

    /// List the landmark vocabulary for a view
    Landmarks {
        /// View to list landmarks for
        #[arg(default_value_t = PhotoType::Front)]
        view: PhotoType,
    },

    /// Classify a deviation value against the severity thresholds
    Classify {
        /// Measurement key (e.g. shoulders_horizontal_level)
        measurement: String,

        /// Deviation in degrees
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Render the text report for a saved assessment entry
    Report {
        /// Path to a saved assessment entry (JSON)
        results: PathBuf,
    },

    /// Export saved results to CSV
    Export {
        /// Path to JSON results file (single entry or batch)
        results: PathBuf,

        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default view for untagged point files
        #[arg(long)]
        set_default_view: Option<PhotoType>,

        /// Set default batch jobs
        #[arg(long)]
        set_jobs: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
