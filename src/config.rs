use serde::{Deserialize, Serialize};

use crate::{
    Result,
    loss::{DELTA, RegGrad, Strategy},
};

fn default_delta() -> f64 {
    DELTA
}

/// The configuration of an [`SvmLoss`](crate::loss::SvmLoss).
///
/// ```json
/// { "strategy": "naive", "delta": 1.0, "reg_grad": "analytic" }
/// ```
///
/// `delta` defaults to [`DELTA`] and a missing `reg_grad` keeps the strategy's own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvmLossConfig {
    pub strategy: Strategy,
    #[serde(default = "default_delta")]
    pub delta: f64,
    #[serde(default)]
    pub reg_grad: Option<RegGrad>,
}

impl SvmLossConfig {
    /// Parses a configuration from its json representation.
    ///
    /// # Arguments
    /// * `s` - The json string.
    ///
    /// # Returns
    /// The configuration or `SvmErr::InvalidConfig` if it's malformed.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
