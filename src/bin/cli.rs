//! CLI for computing body and garment measurements from recorded landmarks.
//!
//! Usage:
//!   silhouette-fit landmarks.json --height 175           # Human-readable
//!   silhouette-fit landmarks.json --height 175 --json    # JSON output
//!   silhouette-fit landmarks.json --height 175 -o report.json

use clap::Parser;
use silhouette_fit::{
    EngineConfig, MeasurementEngine, MeasurementReport, MeasurementValue, ReplayDetector,
    ResultStatus,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "silhouette-fit")]
#[command(author, version, about = "Body measurements and garment sizing from pose landmarks", long_about = None)]
struct Args {
    /// JSON file with the detector's 33 landmarks ({x, y, z, visibility})
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Subject's height in centimeters
    #[arg(long)]
    height: f32,

    /// Subject's weight in kilograms (reserved, not used by any calculation)
    #[arg(long)]
    weight: Option<f32>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Engine configuration file (JSON); defaults apply for absent fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            if args.verbose {
                eprintln!("Loading engine config from {:?}...", path);
            }
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => EngineConfig::default(),
    };
    let engine = MeasurementEngine::with_config(config);

    if args.verbose {
        eprintln!("Loading landmarks from {:?}...", args.landmarks);
    }
    let detector = ReplayDetector::from_json(&std::fs::read(&args.landmarks)?)?;

    if args.verbose {
        eprintln!("Loaded {} landmarks", detector.frame().landmarks().len());
    }

    let report = engine.compute(detector.frame(), args.height, args.weight)?;

    let output_str = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_human_readable(&report)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        if args.verbose {
            eprintln!("Output written to {:?}", path);
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_value(v: &MeasurementValue) -> String {
    match v.value {
        Some(value) => {
            let mut s = format!("{:.1} {} ({:.0}% confidence)", value, v.unit, v.confidence * 100.0);
            if let Some(notes) = &v.notes {
                s.push_str(&format!(" - {}", notes));
            }
            s
        }
        None => match &v.error {
            Some(error) => format!("n/a - {}", error),
            None => "n/a".to_string(),
        },
    }
}

fn format_human_readable(report: &MeasurementReport) -> String {
    let mut s = String::new();

    let status = match report.status {
        ResultStatus::FullSuccess => "full success",
        ResultStatus::PartialSuccess => "partial success",
        ResultStatus::Failed => "failed",
    };
    s.push_str(&format!("Status: {} - {}\n", status, report.message));
    s.push_str(&format!("Calibration factor: {:.4}\n", report.calibration_factor));

    if let Some(warnings) = &report.warnings {
        s.push_str("\nWarnings:\n");
        for warning in warnings {
            s.push_str(&format!("  - {}\n", warning));
        }
    }

    s.push_str("\nBody measurements:\n");
    for (name, value) in report.body_measurements.slots() {
        s.push_str(&format!("  {:<20} {}\n", name, format_value(value)));
    }

    let shirt = &report.garment_measurements.shirt;
    s.push_str("\nShirt:\n");
    s.push_str(&format!("  {:<20} {}\n", "shoulder", format_value(&shirt.shoulder)));
    s.push_str(&format!("  {:<20} {}\n", "chest", format_value(&shirt.chest)));
    s.push_str(&format!("  {:<20} {}\n", "sleeves", format_value(&shirt.sleeves)));
    s.push_str(&format!("  {:<20} {}\n", "length", format_value(&shirt.length)));

    let pants = &report.garment_measurements.pants;
    s.push_str("\nPants:\n");
    s.push_str(&format!("  {:<20} {}\n", "waist", format_value(&pants.waist)));
    s.push_str(&format!("  {:<20} {}\n", "inseam", format_value(&pants.inseam)));
    s.push_str(&format!("  {:<20} {}\n", "rise", format_value(&pants.rise)));
    s.push_str(&format!("  {:<20} {}\n", "leg", format_value(&pants.leg)));

    let jacket = &report.garment_measurements.jacket;
    s.push_str("\nJacket:\n");
    s.push_str(&format!("  {:<20} {}\n", "shoulder", format_value(&jacket.shoulder)));
    s.push_str(&format!("  {:<20} {}\n", "chest", format_value(&jacket.chest)));
    s.push_str(&format!("  {:<20} {}\n", "sleeves", format_value(&jacket.sleeves)));
    s.push_str(&format!("  {:<20} {}\n", "length", format_value(&jacket.length)));

    s
}
