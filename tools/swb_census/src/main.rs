//! SWB census tool: classifies basins into Seasonal Water Balance classes and
//! reports how many fall into each class.
//!
//! Input is a JSON array of basins:
//!   [{"id": "01013500", "delta_p": 0.12, "f_s": 0.31, "phi": 0.62}, ...]
//! Missing or null indices are read as NaN and end up unclassified.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use swb_core::{
    class_names, BoundaryConfig, Census, ClassificationPoint, Classifier, Preset, SwbClass,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "swb_census", about = "Classify basins into Seasonal Water Balance classes")]
struct Args {
    /// JSON array of basins with delta_p, f_s and phi.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write per-basin labels and the census as JSON.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Classify a single point: DELTA_P F_S PHI.
    #[arg(long, num_args = 3, value_names = ["DELTA_P", "F_S", "PHI"], allow_negative_numbers = true)]
    point: Option<Vec<f64>>,

    /// Use the literature (Berghuijs et al. 2014) boundaries.
    #[arg(long)]
    original: bool,

    /// Leave out the extra class B3.
    #[arg(long)]
    no_extra_class: bool,

    /// Custom boundary table (JSON); overrides --original.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log one diagnostic line per classified point.
    #[arg(long)]
    report: bool,

    /// Print the valid class names and exit.
    #[arg(long)]
    list_classes: bool,

    /// Print the active box table as JSON and exit.
    #[arg(long)]
    boxes: bool,
}

// ── JSON schema ───────────────────────────────────────────────────────────────

fn null_as_nan<'de, D: serde::Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    let v: Option<f64> = Option::deserialize(d)?;
    Ok(v.unwrap_or(f64::NAN))
}

#[derive(Debug, Deserialize)]
struct BasinRecord {
    id: String,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    delta_p: f64,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    f_s: f64,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    phi: f64,
}

fn nan() -> f64 {
    f64::NAN
}

impl BasinRecord {
    fn point(&self) -> ClassificationPoint {
        ClassificationPoint::new(self.delta_p, self.f_s, self.phi)
    }
}

#[derive(Serialize)]
struct BasinLabel<'a> {
    id: &'a str,
    class: SwbClass,
}

#[derive(Serialize)]
struct CensusReport<'a> {
    census: &'a Census,
    basins: Vec<BasinLabel<'a>>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<BoundaryConfig> {
    let include_extra_class = !args.no_extra_class;
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config = BoundaryConfig::from_json(&text)
            .with_context(|| format!("Invalid boundary table {}", path.display()))?;
        if config.includes_extra_class() != include_extra_class {
            warn!(
                "{} {} B3; --no-extra-class is ignored for custom tables",
                path.display(),
                if config.includes_extra_class() { "defines" } else { "does not define" }
            );
        }
        return Ok(config);
    }
    let preset = if args.original { Preset::Original } else { Preset::Expanded };
    Ok(BoundaryConfig::preset(preset, include_extra_class))
}

fn parse_basins(text: &str) -> Result<Vec<BasinRecord>> {
    let basins: Vec<BasinRecord> = serde_json::from_str(text).context("Failed to parse basin list")?;
    Ok(basins)
}

fn read_basins(path: &Path) -> Result<Vec<BasinRecord>> {
    let text = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    parse_basins(&text).with_context(|| format!("In {}", path.display()))
}

fn describe(class: SwbClass) -> String {
    match class.family() {
        Some(family) => format!("{class}: {family}"),
        None => format!("{class}: no matching class box"),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.report { "info" } else { "warn" };
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()))
        .init();

    if args.list_classes {
        for name in class_names(!args.no_extra_class) {
            println!("{name}");
        }
        return Ok(());
    }

    let config = load_config(&args)?;

    if args.boxes {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let classifier = Classifier::new(config).with_diagnostics(args.report);

    if let Some(values) = &args.point {
        let &[delta_p, f_s, phi] = values.as_slice() else {
            bail!("--point takes exactly three values");
        };
        let result = classifier.classify(ClassificationPoint::new(delta_p, f_s, phi));
        println!("{}", result.class);
        info!("{}", describe(result.class));
        return Ok(());
    }

    let Some(input) = &args.input else {
        bail!("No input specified. Use --point or --input (see --help).");
    };

    let basins = read_basins(input)?;
    info!("classifying {} basins from {}", basins.len(), input.display());

    let points: Vec<ClassificationPoint> = basins.iter().map(BasinRecord::point).collect();
    let results = classifier.classify_batch(&points);
    let census = Census::from_classifications(classifier.config(), &results);
    println!("{census}");

    if let Some(out_path) = &args.output {
        let report = CensusReport {
            census: &census,
            basins: basins
                .iter()
                .zip(&results)
                .map(|(b, r)| BasinLabel { id: &b.id, class: r.class })
                .collect(),
        };
        fs::write(out_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Write failed: {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basins_with_missing_values() {
        let basins = parse_basins(
            r#"[
                {"id": "a", "delta_p": -0.3, "f_s": 0.2, "phi": 0.5},
                {"id": "b", "delta_p": null, "f_s": 0.2, "phi": 0.5},
                {"id": "c", "f_s": 0.2, "phi": 0.5}
            ]"#,
        )
        .unwrap();
        assert_eq!(basins.len(), 3);
        assert_eq!(basins[0].point(), ClassificationPoint::new(-0.3, 0.2, 0.5));
        assert!(basins[1].delta_p.is_nan());
        assert!(basins[2].delta_p.is_nan());
    }

    #[test]
    fn missing_values_are_unclassified() {
        let basins = parse_basins(r#"[{"id": "x", "delta_p": null, "f_s": 0.1, "phi": 0.5}]"#).unwrap();
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(basins[0].point()).class, SwbClass::Unclassified);
    }

    #[test]
    fn describes_class_family() {
        assert_eq!(describe(SwbClass::A1), "A1: precipitation out of phase");
        assert_eq!(describe(SwbClass::Unclassified), "None: no matching class box");
    }

    #[test]
    fn rejects_malformed_basin_list() {
        assert!(parse_basins(r#"{"id": "x"}"#).is_err());
    }

    #[test]
    fn point_flag_accepts_negative_values() {
        let args = Args::try_parse_from(["swb_census", "--point", "-0.3", "0.2", "0.5"]).unwrap();
        assert_eq!(args.point, Some(vec![-0.3, 0.2, 0.5]));
    }

    #[test]
    fn preset_flags_select_boundaries() {
        let args = Args::try_parse_from(["swb_census", "--original", "--no-extra-class"]).unwrap();
        assert_eq!(load_config(&args).unwrap(), BoundaryConfig::original());

        let args = Args::try_parse_from(["swb_census"]).unwrap();
        assert_eq!(load_config(&args).unwrap(), BoundaryConfig::default());
    }

    #[test]
    fn report_serializes_labels() {
        let classifier = Classifier::from_preset(Preset::Original, false);
        let basins = parse_basins(r#"[{"id": "g1", "delta_p": 0.5, "f_s": 0.1, "phi": 3.0}]"#).unwrap();
        let results = classifier.classify_batch(&[basins[0].point()]);
        let census = Census::from_classifications(classifier.config(), &results);
        let report = CensusReport {
            census: &census,
            basins: vec![BasinLabel { id: &basins[0].id, class: results[0].class }],
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["basins"][0]["class"], "C2");
        assert_eq!(json["census"]["unclassified"], 0);
    }
}
