use circstat::{
    circular_correlation, circular_correlation_par, convert, degree_mean, mean_resultant_length,
    radian_mean, AngleRange, AngleUnit, CircStatResult,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Circular statistics for paired angle columns (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    x_column: String,
    x_range: String,
    y_column: String,
    y_range: String,
    output_path: Option<String>,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            x_column: String::new(),
            x_range: AngleRange::Deg0To360.to_string(),
            y_column: String::new(),
            y_range: AngleRange::Deg0To360.to_string(),
            output_path: None,
            parallel: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    n: usize,
    /// Circular mean of x, in the unit of `x_range`.
    mean_x: f64,
    /// Circular mean of y, in the unit of `y_range`.
    mean_y: f64,
    resultant_length_x: f64,
    resultant_length_y: f64,
    /// `None` when either series has no circular variance.
    correlation: Option<f64>,
}

fn read_columns(
    path: &Path,
    x_column: &str,
    y_column: &str,
) -> Result<(Vec<f64>, Vec<f64>), Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("column {name:?} not found in {}", path.display()))
    };
    let x_idx = find(x_column)?;
    let y_idx = find(y_column)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let parse = |idx: usize, name: &str| -> Result<f64, String> {
            let field = record.get(idx).unwrap_or_default().trim();
            field
                .parse::<f64>()
                .map_err(|err| format!("row {}: column {name:?} value {field:?}: {err}", row + 1))
        };
        x.push(parse(x_idx, x_column)?);
        y.push(parse(y_idx, y_column)?);
    }
    Ok((x, y))
}

/// Returns the circular mean (in the range's unit) and the mean resultant length.
fn summarize(values: &[f64], range: AngleRange) -> (f64, f64) {
    let mean = match range.unit() {
        AngleUnit::Degrees => degree_mean(values),
        AngleUnit::Radians => radian_mean(values),
    };
    let radians: Vec<f64> = values
        .iter()
        .map(|&v| convert(v, range, AngleRange::Rad0To2Pi))
        .collect();
    (mean, mean_resultant_length(&radians))
}

fn build_output(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
    parallel: bool,
) -> CircStatResult<Output> {
    let correlation = if parallel {
        circular_correlation_par(x, x_range, y, y_range)?
    } else {
        circular_correlation(x, x_range, y, y_range)?
    };
    let (mean_x, resultant_length_x) = summarize(x, x_range);
    let (mean_y, resultant_length_y) = summarize(y, y_range);
    Ok(Output {
        n: x.len(),
        mean_x,
        mean_y,
        resultant_length_x,
        resultant_length_y,
        correlation: (!correlation.is_nan()).then_some(correlation),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("circstat=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }
    if config.x_column.is_empty() || config.y_column.is_empty() {
        return Err("x_column and y_column must be set in the config".into());
    }
    let x_range: AngleRange = config.x_range.parse()?;
    let y_range: AngleRange = config.y_range.parse()?;

    let (x, y) = read_columns(Path::new(&config.input_path), &config.x_column, &config.y_column)?;
    if x.is_empty() {
        return Err(format!("{} contains no rows", config.input_path).into());
    }
    tracing::info!(rows = x.len(), %x_range, %y_range, "loaded angle columns");

    let output = build_output(&x, x_range, &y, y_range, config.parallel)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build_output, summarize};
    use circstat::{AngleRange, CircStatError};

    #[test]
    fn output_has_flat_fields() {
        let x = [-170.0, -45.0, 10.0, 95.0];
        let y = [190.0, 315.0, 10.0, 95.0];
        let output =
            build_output(&x, AngleRange::DegNeg180To180, &y, AngleRange::Deg0To360, false)
                .unwrap();
        let value = serde_json::to_value(&output).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "correlation",
                "mean_x",
                "mean_y",
                "n",
                "resultant_length_x",
                "resultant_length_y"
            ]
        );
        assert_eq!(value["n"], 4);
        let r = value["correlation"].as_f64().unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_output_matches_sequential() {
        let x = [0.3, 1.2, 2.9, 4.4, 5.8];
        let y = [0.5, 1.0, 3.1, 4.0, 6.1];
        let seq =
            build_output(&x, AngleRange::Rad0To2Pi, &y, AngleRange::Rad0To2Pi, false).unwrap();
        let par = build_output(&x, AngleRange::Rad0To2Pi, &y, AngleRange::Rad0To2Pi, true).unwrap();
        let (seq_r, par_r) = (seq.correlation.unwrap(), par.correlation.unwrap());
        assert!((seq_r - par_r).abs() < 1e-12);
        assert_eq!(seq.mean_x, par.mean_x);
    }

    #[test]
    fn zero_variance_serializes_as_null() {
        let x = [0.0; 3];
        let y = [10.0, 120.0, 250.0];
        let output =
            build_output(&x, AngleRange::Deg0To360, &y, AngleRange::Deg0To360, false).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert!(value["correlation"].is_null());
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = build_output(&[1.0, 2.0], AngleRange::Rad0To2Pi, &[1.0], AngleRange::Rad0To2Pi, false)
            .err()
            .unwrap();
        assert_eq!(err, CircStatError::LengthMismatch { x_len: 2, y_len: 1 });
    }

    #[test]
    fn degree_series_mean_stays_in_degrees() {
        let (mean, resultant) = summarize(&[350.0, 10.0], AngleRange::Deg0To360);
        assert!(mean.abs() < 1e-9);
        assert!(resultant > 0.98 && resultant <= 1.0);
    }
}
