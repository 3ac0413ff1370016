//! Ohm's-law resistance from paired voltage/current channels.
//!
//! - Resistance (Ω) = U / I, elementwise, with samples paired by index.
//! - Channels of unequal length are rejected with `ShapeMismatch`; nothing is broadcast or truncated.
//! - Zero current is not an error: the result follows IEEE-754 (±inf, or NaN for 0/0).
//!   Use `ResistanceSeries::non_finite_indices` to find those samples.
//!
//! The bridge constants describe the Wheatstone bridge used with the intensity sensor:
//! `R_0 = R_3 * R_2 / R_1`.
use crate::analysis::{AnalysisError, MeasurementSeries, ResistanceSeries};
/// Fixed bridge arm (ohms).
pub const BRIDGE_R1_OHMS: f64 = 10e3;
/// Variable arm at balance, dial reading minus lead offset (ohms).
pub const BRIDGE_R2_OHMS: f64 = 37.0 - 6.1;
/// Reference arm (ohms).
pub const BRIDGE_R3_OHMS: f64 = 100.0;
/// Compute the resistance series `voltage / current`.
pub fn resistance(
    voltage: &MeasurementSeries,
    current: &MeasurementSeries,
) -> Result<ResistanceSeries, AnalysisError> {
    voltage.ensure_paired(current)?;
    let values = voltage.values() / current.values();
    Ok(ResistanceSeries::from_array(
        format!("{}/{}", voltage.label, current.label),
        values,
    ))
}
/// Resistance of the unknown arm of a balanced bridge: `r3 * r2 / r1`.
pub fn bridge_reference_resistance(r1: f64, r2: f64, r3: f64) -> f64 {
    r3 * r2 / r1
}
/// Indices whose current magnitude is at or below `threshold`.
pub fn near_zero_current_indices(current: &MeasurementSeries, threshold: f64) -> Vec<usize> {
    current
        .values()
        .iter()
        .enumerate()
        .filter(|(_, i)| i.abs() <= threshold)
        .map(|(idx, _)| idx)
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    fn series(label: &str, values: &[f64]) -> MeasurementSeries {
        MeasurementSeries::new(label, "", values.to_vec())
    }
    #[test]
    fn divides_elementwise() {
        let r = resistance(&series("U", &[10.0, 20.0]), &series("I", &[2.0, 4.0])).unwrap();
        assert_eq!(r.values().to_vec(), vec![5.0, 5.0]);
        assert_eq!(r.label, "U/I");
    }
    #[test]
    fn mismatched_lengths_fail() {
        let err = resistance(&series("U", &[1.0, 2.0, 3.0]), &series("I", &[1.0])).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ShapeMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }
    #[test]
    fn zero_current_passes_through_ieee() {
        let r = resistance(&series("U", &[10.0]), &series("I", &[0.0])).unwrap();
        assert!(r.values()[0].is_infinite() && r.values()[0] > 0.0);
        let r = resistance(&series("U", &[0.0]), &series("I", &[0.0])).unwrap();
        assert!(r.values()[0].is_nan());
        assert_eq!(r.non_finite_indices(), vec![0]);
    }
    #[test]
    fn empty_channels_give_empty_series() {
        let r = resistance(&series("U", &[]), &series("I", &[])).unwrap();
        assert_eq!(r.len(), 0);
    }
    #[test]
    fn bridge_reference_matches_lab_constants() {
        let r0 = bridge_reference_resistance(BRIDGE_R1_OHMS, BRIDGE_R2_OHMS, BRIDGE_R3_OHMS);
        assert!((r0 - 0.309).abs() < 1e-12);
    }
    #[test]
    fn flags_near_zero_current() {
        let i = series("I", &[1.0, 1e-15, 0.0, -2.0]);
        assert_eq!(near_zero_current_indices(&i, 1e-12), vec![1, 2]);
    }
    proptest! {
        #[test]
        fn each_sample_is_voltage_over_current(
            pairs in prop::collection::vec((-1e6f64..1e6, 1e-3f64..1e3), 0..64)
        ) {
            let (u, i): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let r = resistance(&series("U", &u), &series("I", &i)).unwrap();
            prop_assert_eq!(r.len(), u.len());
            for k in 0..u.len() {
                prop_assert_eq!(r.values()[k], u[k] / i[k]);
            }
        }
    }
}
