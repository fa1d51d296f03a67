//! Cropdoc - crop disease treatment recommendations from the terminal
//!
//! Looks up diseases in the static catalog, ranks treatment options for the
//! reported severity and preference, and optionally finds nearby suppliers
//! and price estimates.

mod cache;
mod cli;
mod config;
mod data;
mod engine;
mod service;
mod sweep;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{parse_crop_arg, parse_severity_arg, Cli, Command};
use config::Config;
use data::{all_diseases, diseases_for_crop, get_disease, prices, Disease};
use engine::RecommendationCriteria;
use service::{RecommendationService, ServiceError};
use sweep::{SweeperConfig, SweeperHandle};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let sweep_interval = Duration::from_secs(config.sweep_interval_secs);
    let service = RecommendationService::new(config);

    let sweeper = SweeperHandle::spawn(
        SweeperConfig {
            interval: sweep_interval,
            enabled: true,
        },
        service.sweep_targets(),
    );

    let outcome = run(cli, &service).await;
    sweeper.shutdown().await;

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Dispatches the parsed command against the service
async fn run(cli: Cli, service: &RecommendationService) -> Result<(), String> {
    match cli.command {
        Command::Recommend {
            disease,
            severity,
            organic,
            max_results,
        } => {
            let severity = parse_severity_arg(&severity).map_err(|e| e.to_string())?;
            let criteria = RecommendationCriteria {
                disease_id: disease.trim().to_lowercase(),
                severity,
                organic_preference: organic,
                max_results,
            };

            match service.get_recommendation(&criteria) {
                Ok(result) => {
                    print_recommendation(&criteria, &result.treatments);
                    Ok(())
                }
                Err(ServiceError::Recommend(_)) => {
                    // A disease with no applicable options is an answer,
                    // not a failure
                    println!(
                        "No applicable treatments for '{}' at {} severity.",
                        criteria.disease_id, criteria.severity
                    );
                    if criteria.disease_id == "healthy" {
                        println!("The plant looks healthy; no treatment needed.");
                    } else if criteria.organic_preference {
                        println!("Try again without --organic to include chemical options.");
                    }
                    Ok(())
                }
                Err(err) => {
                    error!(error = %err, "recommendation failed");
                    Err(err.to_string())
                }
            }
        }
        Command::Info { disease } => {
            let record = get_disease(&disease)
                .ok_or_else(|| format!("unknown disease: '{}'", disease))?;
            print_disease_info(record);
            Ok(())
        }
        Command::Diseases { crop } => {
            let diseases: Vec<&Disease> = match crop {
                Some(name) => {
                    let crop = parse_crop_arg(&name).map_err(|e| e.to_string())?;
                    diseases_for_crop(crop)
                }
                None => all_diseases().iter().collect(),
            };

            for disease in diseases {
                println!(
                    "{:<20} {:<10} {} treatment option(s)",
                    disease.id,
                    disease.crop,
                    disease.treatments.len()
                );
            }
            Ok(())
        }
        Command::Suppliers {
            location,
            radius_km,
        } => {
            let suppliers = service
                .find_suppliers(&location, radius_km)
                .await
                .map_err(|e| e.to_string())?;

            if suppliers.is_empty() {
                println!("No suppliers found within {}km of {}.", radius_km, location);
                return Ok(());
            }

            println!("Suppliers within {}km of {}:", radius_km, location);
            for supplier in suppliers {
                println!(
                    "  {:<35} {:<10} {:>6.1} km",
                    supplier.name, supplier.kind, supplier.distance_km
                );
            }
            Ok(())
        }
        Command::Prices {
            treatment,
            location,
            max_results,
        } => {
            let quotes = service
                .get_prices(&treatment, location.as_deref(), max_results)
                .map_err(|e| e.to_string())?;
            let summary = prices::summarize(&quotes);

            println!("Price estimates for {}:", treatment);
            for quote in &quotes {
                println!(
                    "  GHS {:>7.2}  {:<10} {:<28} {:<12} ({})",
                    quote.price_ghs, quote.quantity, quote.supplier, quote.location,
                    quote.availability
                );
            }
            if let (Some(avg), Some(min), Some(max)) =
                (summary.average_ghs, summary.min_ghs, summary.max_ghs)
            {
                println!("  average GHS {:.2} (range {:.2}-{:.2})", avg, min, max);
            }
            Ok(())
        }
    }
}

/// Prints a ranked recommendation table
fn print_recommendation(criteria: &RecommendationCriteria, treatments: &[data::TreatmentOption]) {
    println!(
        "Treatments for {} ({} severity{}):",
        criteria.disease_id,
        criteria.severity,
        if criteria.organic_preference {
            ", organic only"
        } else {
            ""
        }
    );
    for (rank, option) in treatments.iter().enumerate() {
        println!(
            "  {}. {} [{}] - effectiveness {:.0}%, ~GHS {:.2}",
            rank + 1,
            option.name,
            option.category,
            option.effectiveness * 100.0,
            option.cost_ghs
        );
        println!("     {}", option.instructions);
    }
}

/// Prints the full catalog record for a disease
fn print_disease_info(disease: &Disease) {
    println!("{} ({} disease)", disease.name, disease.crop);
    println!("\nSymptoms:");
    for symptom in disease.symptoms {
        println!("  - {}", symptom);
    }
    println!("\nPrevention:");
    for method in disease.prevention {
        println!("  - {}", method);
    }
    if disease.treatments.is_empty() {
        println!("\nNo treatments listed; no treatment needed.");
    } else {
        println!("\nTreatments:");
        for option in disease.treatments {
            println!(
                "  - {} [{}], {}-{} severity, effectiveness {:.0}%, ~GHS {:.2}",
                option.name,
                option.category,
                option.min_severity,
                option.max_severity,
                option.effectiveness * 100.0,
                option.cost_ghs
            );
        }
    }
}
