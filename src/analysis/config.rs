use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::analysis::resistance::{BRIDGE_R1_OHMS, BRIDGE_R2_OHMS, BRIDGE_R3_OHMS};
use crate::analysis::AnalysisError;
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}
impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            r1: BRIDGE_R1_OHMS,
            r2: BRIDGE_R2_OHMS,
            r3: BRIDGE_R3_OHMS,
        }
    }
}
/// Tunables for one analysis run. Every field has a default so a config file may be partial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Factor applied to the intensity sensor column on load (file stores mV).
    pub sensor_scale: f64,
    pub bridge: BridgeConfig,
    /// Currents at or below this magnitude are flagged in the log.
    pub near_zero_current: f64,
}
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sensor_scale: 1e-3,
            bridge: BridgeConfig::default(),
            near_zero_current: 1e-12,
        }
    }
}
impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
    pub fn from_json(text: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.sensor_scale.is_finite() {
            return Err(AnalysisError::Config("sensor_scale must be finite".into()));
        }
        if self.bridge.r1 == 0.0 {
            return Err(AnalysisError::Config("bridge.r1 must be non-zero".into()));
        }
        if self.near_zero_current < 0.0 {
            return Err(AnalysisError::Config(
                "near_zero_current must not be negative".into(),
            ));
        }
        Ok(())
    }
}
