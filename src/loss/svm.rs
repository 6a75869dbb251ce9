use log::debug;
use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::{DELTA, LossFn, RegGrad, naive::hinge_naive, vectorized::hinge_vectorized};
use crate::{Result, config::SvmLossConfig};

/// Selects how the multiclass SVM loss is computed. Both give the same loss.
///
/// - `Naive`      - Loops over every example and class.
/// - `Vectorized` - Whole-matrix operations over the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Naive,
    Vectorized,
}

impl Strategy {
    /// The regularization gradient each strategy has always produced.
    pub fn default_reg_grad(&self) -> RegGrad {
        match self {
            Strategy::Naive => RegGrad::ScalarBroadcast,
            Strategy::Vectorized => RegGrad::Omitted,
        }
    }
}

/// Multiclass SVM (hinge) loss over the weights of a linear classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmLoss {
    strategy: Strategy,
    delta: f64,
    reg_grad: Option<RegGrad>,
}

impl SvmLoss {
    /// Creates a new `SvmLoss` with a margin of [`DELTA`] and the strategy's own regularization
    /// gradient.
    ///
    /// # Arguments
    /// * `strategy` - How to compute the loss.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            delta: DELTA,
            reg_grad: None,
        }
    }

    /// Returns a new `SvmLoss` using the naive strategy.
    pub fn naive() -> Self {
        Self::new(Strategy::Naive)
    }

    /// Returns a new `SvmLoss` using the vectorized strategy.
    pub fn vectorized() -> Self {
        Self::new(Strategy::Vectorized)
    }

    /// Sets the margin the correct class has to win by.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Overrides how the regularization term enters the gradient.
    pub fn with_reg_grad(mut self, reg_grad: RegGrad) -> Self {
        self.reg_grad = Some(reg_grad);
        self
    }

    /// Returns how the loss is computed.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the margin the correct class has to win by.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the regularization gradient in effect, the override if any or else the
    /// strategy's default.
    pub fn reg_grad(&self) -> RegGrad {
        self.reg_grad
            .unwrap_or_else(|| self.strategy.default_reg_grad())
    }
}

impl Default for SvmLoss {
    fn default() -> Self {
        Self::vectorized()
    }
}

impl From<SvmLossConfig> for SvmLoss {
    fn from(config: SvmLossConfig) -> Self {
        let SvmLossConfig {
            strategy,
            delta,
            reg_grad,
        } = config;

        Self {
            strategy,
            delta,
            reg_grad,
        }
    }
}

impl LossFn for SvmLoss {
    fn loss_and_grad(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<usize>,
        reg: f64,
    ) -> Result<(f64, Array2<f64>)> {
        debug!(
            examples = x.nrows(),
            features = w.nrows(),
            classes = w.ncols(),
            delta = self.delta,
            reg = reg;
            "computing {:?} svm loss", self.strategy
        );

        let reg_grad = self.reg_grad();
        match self.strategy {
            Strategy::Naive => hinge_naive(w, x, y, reg, self.delta, reg_grad),
            Strategy::Vectorized => hinge_vectorized(w, x, y, reg, self.delta, reg_grad),
        }
    }
}
