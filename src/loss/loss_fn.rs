use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::Result;

/// A loss over a linear classifier's weights: scores are `x.dot(w)` and `y` holds the index of
/// the correct class of each row of `x`.
pub trait LossFn {
    /// Computes the loss and its gradient with respect to the weights.
    ///
    /// # Arguments
    /// * `w` - The weights, shape (D, C).
    /// * `x` - The data, shape (N, D).
    /// * `y` - The labels, length N.
    /// * `reg` - The regularization strength.
    ///
    /// # Returns
    /// The loss and a freshly allocated gradient with the same shape as `w`.
    fn loss_and_grad(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<usize>,
        reg: f64,
    ) -> Result<(f64, Array2<f64>)>;

    /// Computes only the loss.
    fn loss(
        &self,
        w: ArrayView2<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<usize>,
        reg: f64,
    ) -> Result<f64> {
        self.loss_and_grad(w, x, y, reg).map(|(loss, _)| loss)
    }
}
