use ndarray::Array1;
use crate::analysis::AnalysisError;
/// One instrument channel: positional samples plus the label/unit they were recorded under.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementSeries {
    pub label: String,
    pub unit: String,
    values: Array1<f64>,
}
impl MeasurementSeries {
    pub fn new(label: impl Into<String>, unit: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
            values: Array1::from(values),
        }
    }
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns a copy with every sample multiplied by `factor` (e.g. mV -> V).
    pub fn scaled(&self, factor: f64, unit: impl Into<String>) -> Self {
        Self {
            label: self.label.clone(),
            unit: unit.into(),
            values: &self.values * factor,
        }
    }
    /// Fails unless `other` has the same number of samples.
    pub fn ensure_paired(&self, other: &MeasurementSeries) -> Result<(), AnalysisError> {
        if self.len() != other.len() {
            return Err(AnalysisError::ShapeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }
}
/// Derived voltage / current series, in ohms.
#[derive(Clone, Debug, PartialEq)]
pub struct ResistanceSeries {
    pub label: String,
    values: Array1<f64>,
}
impl ResistanceSeries {
    pub(crate) fn from_array(label: impl Into<String>, values: Array1<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Indices whose value is infinite or NaN (zero current in the input).
    pub fn non_finite_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| i)
            .collect()
    }
    /// Elementwise `self - other`.
    pub fn difference(&self, other: &ResistanceSeries) -> Result<Array1<f64>, AnalysisError> {
        if self.len() != other.len() {
            return Err(AnalysisError::ShapeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(&self.values - &other.values)
    }
}
