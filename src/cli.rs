//! Command-line interface for cropdoc
//!
//! Parses subcommands with clap and converts loosely-typed string arguments
//! into the domain's enums before anything else runs.

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::data::{Crop, Severity};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified severity is not recognized
    #[error("Invalid severity: '{0}'. Valid severities: mild, moderate, severe")]
    InvalidSeverity(String),

    /// The specified crop is not recognized
    #[error("Invalid crop: '{0}'. Valid crops: cashew, cassava, maize, tomato")]
    InvalidCrop(String),
}

/// Cropdoc - crop disease treatment recommendations from the terminal
#[derive(Parser, Debug)]
#[command(name = "cropdoc")]
#[command(about = "Crop disease treatment recommendations, suppliers, and prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend treatments for a disease
    Recommend {
        /// Disease identifier (e.g., anthracnose)
        disease: String,
        /// Observed severity: mild, moderate, or severe
        #[arg(long, default_value = "moderate")]
        severity: String,
        /// Only consider organic treatments
        #[arg(long)]
        organic: bool,
        /// Limit the number of returned options
        #[arg(long, value_name = "N")]
        max_results: Option<usize>,
    },
    /// Show detailed information about a disease
    Info {
        /// Disease identifier (e.g., mosaic)
        disease: String,
    },
    /// List catalog diseases, optionally for one crop
    Diseases {
        /// Filter by crop: cashew, cassava, maize, or tomato
        #[arg(long)]
        crop: Option<String>,
    },
    /// Find agricultural suppliers near a location
    Suppliers {
        /// Free-text location (e.g., "Accra, Ghana")
        location: String,
        /// Search radius in kilometers
        #[arg(long, default_value_t = 10)]
        radius_km: u32,
    },
    /// Show market price estimates for a treatment product
    Prices {
        /// Treatment/product name (e.g., "mancozeb")
        treatment: String,
        /// Location filter (e.g., "Kumasi")
        #[arg(long)]
        location: Option<String>,
        /// Maximum number of quotes
        #[arg(long, default_value_t = 8, value_name = "N")]
        max_results: usize,
    },
}

/// Parses a severity string argument into a Severity enum
pub fn parse_severity_arg(s: &str) -> Result<Severity, CliError> {
    Severity::parse(s).ok_or_else(|| CliError::InvalidSeverity(s.to_string()))
}

/// Parses a crop string argument into a Crop enum
pub fn parse_crop_arg(s: &str) -> Result<Crop, CliError> {
    Crop::parse(s).ok_or_else(|| CliError::InvalidCrop(s.to_string()))
}
