// src/reshape.rs
use log::debug;
use crate::analysis::AnalysisError;
/// Rectangular resistance / temperature / current table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripletTable {
    pub resistance: Vec<f64>,
    pub temperature: Vec<f64>,
    pub current: Vec<f64>,
}
impl TripletTable {
    pub fn rows(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.resistance
            .iter()
            .zip(&self.temperature)
            .zip(&self.current)
            .map(|((&r, &t), &j)| [r, t, j])
    }
}
/// Split text into blocks separated by one or more blank lines.
fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
/// Parse repeating resistance / temperature / current blocks into one table.
///
/// Block `k` feeds column `k % 3`; values of the same role are appended in file order.
/// A run of blank lines counts as one separator, unlike a literal split on `"\n\n"`
/// where four or more newlines would yield an empty block that consumes a role.
pub fn parse_triplet_blocks(text: &str) -> Result<TripletTable, AnalysisError> {
    let mut table = TripletTable::default();
    for (index, block) in blocks(text).into_iter().enumerate() {
        let column = match index % 3 {
            0 => &mut table.resistance,
            1 => &mut table.temperature,
            _ => &mut table.current,
        };
        for token in block.iter().flat_map(|line| line.split_whitespace()) {
            let value = token.parse::<f64>().map_err(|_| AnalysisError::Parse {
                token: token.to_string(),
                context: format!("block {}", index + 1),
            })?;
            column.push(value);
        }
    }
    let rows = table.resistance.len();
    for other in [&table.temperature, &table.current] {
        if other.len() != rows {
            return Err(AnalysisError::ShapeMismatch {
                expected: rows,
                actual: other.len(),
            });
        }
    }
    debug!("reshaped {rows} triplet rows");
    Ok(table)
}
