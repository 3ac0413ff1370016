// src/main.rs
mod analysis;
mod recorder;
mod reshape;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use analysis::{
    bridge_reference_resistance, reconcile, AnalysisConfig, BoltzmannData, ColumnSummary,
    Delimiter, LeslieData, ReconciliationReport,
};
/// ohmlab - lab resistance reconciliation and data reshaping
#[derive(Parser)]
#[command(name = "ohmlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}
#[derive(Subcommand)]
enum Commands {
    /// Compare multimeter and power-supply resistance from one measurement file
    Reconcile {
        /// Five columns: U_multimeter, U_power_supply, I_multimeter, I_power_supply, U_sensor [mV]
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Column delimiter: ws, tab, or a single character
        #[arg(short, long, default_value = "ws")]
        delimiter: Delimiter,
        /// JSON file overriding analysis constants
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Load the Leslie cube dataset (header row skipped) and summarize each column
    Leslie {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, default_value = "ws")]
        delimiter: Delimiter,
    },
    /// Reshape resistance/temperature/current blocks into a three-column CSV
    Reshape {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Defaults to INPUT with a .csv extension
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let config = match path {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    debug!("config: {config:?}");
    Ok(config)
}
/// Render a series the way it is printed to the console: `[5, 4.5, inf]`.
fn format_series<'a>(values: impl IntoIterator<Item = &'a f64>) -> String {
    let parts: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
fn run_reconcile(
    input: &Path,
    delimiter: Delimiter,
    config: &AnalysisConfig,
) -> Result<ReconciliationReport> {
    let data = BoltzmannData::load(input, delimiter, config)
        .with_context(|| format!("failed to read measurements from {}", input.display()))?;
    info!("{} samples per channel", data.len());
    let sensor = ColumnSummary::of(&data.voltage_intensity_sensor);
    info!(
        "{}: min {} max {} mean {} {}",
        sensor.label, sensor.min, sensor.max, sensor.mean, sensor.unit
    );
    let report = reconcile(&data, config.near_zero_current)?;
    let r0 = bridge_reference_resistance(config.bridge.r1, config.bridge.r2, config.bridge.r3);
    info!("bridge reference resistance R_0 = {r0} Ohm");
    println!("R_power_supply = {}", format_series(report.power_supply.values()));
    println!("R_multimeter   = {}", format_series(report.multimeter.values()));
    println!("difference     = {}", format_series(&report.difference));
    let non_finite = report.non_finite();
    if !non_finite.is_empty() {
        println!("non-finite at  = {non_finite:?}");
    }
    if let (Some(max), Some(mean)) = (report.max_abs_difference(), report.mean_abs_difference()) {
        info!("|difference|: max {max}, mean {mean}");
    }
    Ok(report)
}
fn run_leslie(input: &Path, delimiter: Delimiter) -> Result<()> {
    let data = LeslieData::load(input, delimiter)
        .with_context(|| format!("failed to read Leslie data from {}", input.display()))?;
    println!("{} rows", data.len());
    for column in data.summary() {
        println!(
            "{:<10} min {:>10.4} max {:>10.4} mean {:>10.4} {}",
            column.label, column.min, column.max, column.mean, column.unit
        );
    }
    Ok(())
}
fn run_reshape(input: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let table = reshape::parse_triplet_blocks(&text)
        .with_context(|| format!("failed to reshape {}", input.display()))?;
    let rows = recorder::write_table(output, &table)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{rows} rows -> {}", output.display());
    Ok(())
}
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Reconcile {
            input,
            delimiter,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            run_reconcile(&input, delimiter, &config).map(|_| ())
        }
        Commands::Leslie { input, delimiter } => run_leslie(&input, delimiter),
        Commands::Reshape { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("csv"));
            run_reshape(&input, &output)
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
    #[test]
    fn series_formatting() {
        assert_eq!(format_series(&[5.0, 4.5, f64::INFINITY]), "[5, 4.5, inf]");
        assert_eq!(format_series(&[] as &[f64]), "[]");
    }
    #[test]
    fn reshape_defaults_output_next_to_input() {
        let cli = Cli::try_parse_from(["ohmlab", "-v", "reshape", "runs/test.txt"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Reshape { input, output } => {
                assert_eq!(input, PathBuf::from("runs/test.txt"));
                assert!(output.is_none());
            }
            _ => panic!("expected reshape"),
        }
    }
    #[test]
    fn reconcile_accepts_comma_delimiter() {
        let cli = Cli::try_parse_from(["ohmlab", "reconcile", "data.csv", "-d", ","]).unwrap();
        match cli.command {
            Commands::Reconcile { delimiter, .. } => assert_eq!(delimiter, Delimiter::Char(b',')),
            _ => panic!("expected reconcile"),
        }
    }
    #[test]
    fn reconcile_reports_both_instruments_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("boltzmann.txt");
        fs::write(&data, "10 9 2 2 1500\n20 18 5 4.5 2500\n").unwrap();
        let report =
            run_reconcile(&data, Delimiter::Whitespace, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.power_supply.values().to_vec(), vec![4.5, 4.0]);
        assert_eq!(report.multimeter.values().to_vec(), vec![5.0, 4.0]);
        assert_eq!(format_series(&report.difference), "[0.5, 0]");
        assert!(report.non_finite().is_empty());
    }
    #[test]
    fn reconcile_keeps_zero_current_samples() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("boltzmann.csv");
        fs::write(&data, "10,9,0,2,0\n").unwrap();
        let report =
            run_reconcile(&data, Delimiter::Char(b','), &AnalysisConfig::default()).unwrap();
        assert_eq!(format_series(report.multimeter.values()), "[inf]");
        assert_eq!(report.non_finite(), vec![0]);
    }
    #[test]
    fn reconcile_missing_file_names_the_path() {
        let err = run_reconcile(
            Path::new("/nonexistent/ohmlab/run.txt"),
            Delimiter::Whitespace,
            &AnalysisConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ohmlab/run.txt"));
    }
    #[test]
    fn reshape_writes_two_decimal_csv() {
        let dir = tempfile::tempdir().unwrap();
        let blocks = dir.path().join("test.txt");
        fs::write(&blocks, "1.111\n\n2.222\n\n3.333\n").unwrap();
        let out = blocks.with_extension("csv");
        run_reshape(&blocks, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "1.11,2.22,3.33\n");
    }
}
