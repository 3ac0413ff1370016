use log::warn;
use ndarray::Array1;
use crate::analysis::resistance::{near_zero_current_indices, resistance};
use crate::analysis::{AnalysisError, BoltzmannData, ResistanceSeries};
/// Both instruments' resistance series and how far apart they are.
#[derive(Clone, Debug)]
pub struct ReconciliationReport {
    pub power_supply: ResistanceSeries,
    pub multimeter: ResistanceSeries,
    /// `multimeter - power_supply`, elementwise.
    pub difference: Array1<f64>,
}
impl ReconciliationReport {
    /// Sample indices where either instrument produced inf/NaN.
    pub fn non_finite(&self) -> Vec<usize> {
        let mut indices = self.power_supply.non_finite_indices();
        indices.extend(self.multimeter.non_finite_indices());
        indices.sort_unstable();
        indices.dedup();
        indices
    }
    pub fn max_abs_difference(&self) -> Option<f64> {
        self.finite_abs_differences().reduce(f64::max)
    }
    pub fn mean_abs_difference(&self) -> Option<f64> {
        let (sum, count) = self
            .finite_abs_differences()
            .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));
        (count > 0).then(|| sum / count as f64)
    }
    fn finite_abs_differences(&self) -> impl Iterator<Item = f64> + '_ {
        self.difference
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .map(f64::abs)
    }
}
/// Compute each instrument's resistance and their difference.
///
/// `near_zero_current` only affects logging; the division itself is never guarded.
pub fn reconcile(
    data: &BoltzmannData,
    near_zero_current: f64,
) -> Result<ReconciliationReport, AnalysisError> {
    for current in [&data.current_power_supply, &data.current_multimeter] {
        let flagged = near_zero_current_indices(current, near_zero_current);
        if !flagged.is_empty() {
            warn!("{}: near-zero current at samples {:?}", current.label, flagged);
        }
    }
    let power_supply = resistance(&data.voltage_power_supply, &data.current_power_supply)?;
    let multimeter = resistance(&data.voltage_multimeter, &data.current_multimeter)?;
    let difference = multimeter.difference(&power_supply)?;
    let report = ReconciliationReport {
        power_supply,
        multimeter,
        difference,
    };
    for series in [&report.power_supply, &report.multimeter] {
        let non_finite = series.non_finite_indices();
        if !non_finite.is_empty() {
            warn!("{}: non-finite resistance at samples {non_finite:?}", series.label);
        }
    }
    Ok(report)
}
