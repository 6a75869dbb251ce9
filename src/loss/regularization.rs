use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// The L2 penalty added to the loss: `reg * sum(W * W)`, without the 0.5 factor.
pub fn l2_penalty(w: ArrayView2<f64>, reg: f64) -> f64 {
    reg * w.iter().map(|v| v * v).sum::<f64>()
}

/// How the regularization term enters the gradient.
///
/// - `ScalarBroadcast` - Adds `reg * sum(W * W)` to every entry. This is what the naive strategy
///   has always done and it is **not** the derivative of the penalty.
/// - `Omitted`         - Adds nothing, the vectorized strategy's behavior.
/// - `Analytic`        - Adds `2 * reg * W`, the true derivative of [`l2_penalty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegGrad {
    ScalarBroadcast,
    Omitted,
    Analytic,
}

impl RegGrad {
    /// Adds the regularization contribution to an already averaged data gradient.
    ///
    /// # Arguments
    /// * `dw` - The gradient, same shape as `w`.
    /// * `w` - The weights.
    /// * `reg` - The regularization strength.
    pub fn apply(&self, dw: &mut Array2<f64>, w: ArrayView2<f64>, reg: f64) {
        match self {
            RegGrad::ScalarBroadcast => *dw += l2_penalty(w, reg),
            RegGrad::Omitted => {}
            RegGrad::Analytic => dw.scaled_add(2.0 * reg, &w),
        }
    }
}
