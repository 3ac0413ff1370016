use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use log::{debug, info};
use crate::analysis::{AnalysisConfig, AnalysisError, MeasurementSeries};
/// Column separator of a measurement file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Runs of spaces and tabs, as written by most instrument exports.
    #[default]
    Whitespace,
    Char(u8),
}
impl FromStr for Delimiter {
    type Err = AnalysisError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ws" | "whitespace" | " " => Ok(Delimiter::Whitespace),
            "\\t" | "tab" | "\t" => Ok(Delimiter::Char(b'\t')),
            "comma" => Ok(Delimiter::Char(b',')),
            "semicolon" => Ok(Delimiter::Char(b';')),
            other if other.len() == 1 && other.is_ascii() => {
                Ok(Delimiter::Char(other.as_bytes()[0]))
            }
            other => Err(AnalysisError::Config(format!(
                "unsupported delimiter {other:?}"
            ))),
        }
    }
}
/// Something that can hand over a numeric table, row by row.
pub trait TableSource {
    fn read_rows(&mut self) -> Result<Vec<Vec<f64>>, AnalysisError>;
}
/// Delimited text file on disk. Lines starting with `#` are comments.
pub struct FileSource {
    path: PathBuf,
    delimiter: Delimiter,
    header_rows: usize,
}
impl FileSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: Delimiter) -> Self {
        Self {
            path: path.into(),
            delimiter,
            header_rows: 0,
        }
    }
    /// Skip this many raw leading lines (comment or not) before reading numbers.
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }
    fn read_whitespace(&self, text: &str) -> Result<Vec<Vec<f64>>, AnalysisError> {
        skip_lines(text, self.header_rows)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .enumerate()
            .map(|(idx, line)| parse_row(line.split_whitespace(), idx + 1))
            .collect()
    }
    fn read_delimited(&self, text: &str, delimiter: u8) -> Result<Vec<Vec<f64>>, AnalysisError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(skip_lines(text, self.header_rows).as_bytes());
        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            rows.push(parse_row(record.iter(), idx + 1)?);
        }
        Ok(rows)
    }
}
impl TableSource for FileSource {
    fn read_rows(&mut self) -> Result<Vec<Vec<f64>>, AnalysisError> {
        let text = fs::read_to_string(&self.path)?;
        let rows = match self.delimiter {
            Delimiter::Whitespace => self.read_whitespace(&text)?,
            Delimiter::Char(c) => self.read_delimited(&text, c)?,
        };
        info!("loaded {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}
/// Drop the first `count` lines of `text`, whatever they contain.
fn skip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}
fn parse_row<'a>(
    tokens: impl Iterator<Item = &'a str>,
    row: usize,
) -> Result<Vec<f64>, AnalysisError> {
    tokens
        .map(|token| {
            token.parse::<f64>().map_err(|_| AnalysisError::Parse {
                token: token.to_string(),
                context: format!("row {row}"),
            })
        })
        .collect()
}
/// In-memory table for deterministic tests.
#[cfg(test)]
pub struct ManualSource {
    rows: Vec<Vec<f64>>,
}
#[cfg(test)]
impl ManualSource {
    pub fn new(rows: impl IntoIterator<Item = Vec<f64>>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }
}
#[cfg(test)]
impl TableSource for ManualSource {
    fn read_rows(&mut self) -> Result<Vec<Vec<f64>>, AnalysisError> {
        Ok(std::mem::take(&mut self.rows))
    }
}
/// Transpose row-major data into `width` columns, rejecting ragged rows.
fn into_columns(rows: Vec<Vec<f64>>, width: usize) -> Result<Vec<Vec<f64>>, AnalysisError> {
    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for (idx, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(AnalysisError::RowShape {
                row: idx + 1,
                expected: width,
                actual: row.len(),
            });
        }
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
    Ok(columns)
}
/// Readings of the Boltzmann (Stefan-Boltzmann lamp) run.
///
/// File column order: multimeter U, power supply U, multimeter I, power supply I, sensor U.
#[derive(Clone, Debug)]
pub struct BoltzmannData {
    pub voltage_multimeter: MeasurementSeries,
    pub voltage_power_supply: MeasurementSeries,
    pub current_multimeter: MeasurementSeries,
    pub current_power_supply: MeasurementSeries,
    pub voltage_intensity_sensor: MeasurementSeries,
}
impl BoltzmannData {
    pub const COLUMNS: usize = 5;
    pub fn from_source<S: TableSource>(
        source: &mut S,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let mut columns = into_columns(source.read_rows()?, Self::COLUMNS)?.into_iter();
        let mut next = |label: &str, unit: &str| {
            MeasurementSeries::new(label, unit, columns.next().unwrap_or_default())
        };
        let voltage_multimeter = next("U_multimeter", "V");
        let voltage_power_supply = next("U_power_supply", "V");
        let current_multimeter = next("I_multimeter", "A");
        let current_power_supply = next("I_power_supply", "A");
        let voltage_intensity_sensor =
            next("U_sensor", "mV").scaled(config.sensor_scale, "V");
        debug!(
            "boltzmann data: {} samples, sensor scale {}",
            voltage_multimeter.len(),
            config.sensor_scale
        );
        Ok(Self {
            voltage_multimeter,
            voltage_power_supply,
            current_multimeter,
            current_power_supply,
            voltage_intensity_sensor,
        })
    }
    pub fn load(
        path: &Path,
        delimiter: Delimiter,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        Self::from_source(&mut FileSource::new(path, delimiter), config)
    }
    pub fn len(&self) -> usize {
        self.voltage_multimeter.len()
    }
}
/// Min / max / mean of one column, over finite values only.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub label: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
impl ColumnSummary {
    pub fn of(series: &MeasurementSeries) -> Self {
        let finite: Vec<f64> = series
            .values()
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let (min, max, mean) = if finite.is_empty() {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            (
                finite.iter().copied().fold(f64::INFINITY, f64::min),
                finite.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                finite.iter().sum::<f64>() / finite.len() as f64,
            )
        };
        Self {
            label: series.label.clone(),
            unit: series.unit.clone(),
            min,
            max,
            mean,
        }
    }
}
/// Leslie cube run: bridge resistance plus the sensor reading in front of each face.
#[derive(Clone, Debug)]
pub struct LeslieData {
    pub resistance: MeasurementSeries,
    pub black: MeasurementSeries,
    pub grey: MeasurementSeries,
    pub mirror: MeasurementSeries,
    pub white: MeasurementSeries,
}
impl LeslieData {
    pub const COLUMNS: usize = 5;
    pub fn from_source<S: TableSource>(source: &mut S) -> Result<Self, AnalysisError> {
        let mut columns = into_columns(source.read_rows()?, Self::COLUMNS)?.into_iter();
        let mut next = |label: &str, unit: &str| {
            MeasurementSeries::new(label, unit, columns.next().unwrap_or_default())
        };
        Ok(Self {
            resistance: next("resistance", "Ohm"),
            black: next("black", "mV"),
            grey: next("grey", "mV"),
            mirror: next("mirror", "mV"),
            white: next("white", "mV"),
        })
    }
    /// Reads the file, skipping its single header row.
    pub fn load(path: &Path, delimiter: Delimiter) -> Result<Self, AnalysisError> {
        Self::from_source(&mut FileSource::new(path, delimiter).with_header_rows(1))
    }
    pub fn len(&self) -> usize {
        self.resistance.len()
    }
    pub fn summary(&self) -> Vec<ColumnSummary> {
        [
            &self.resistance,
            &self.black,
            &self.grey,
            &self.mirror,
            &self.white,
        ]
        .into_iter()
        .map(ColumnSummary::of)
        .collect()
    }
}
