use log::trace;
use ndarray::{Array2, ArrayView1, ArrayView2};

use super::{
    DELTA,
    regularization::{RegGrad, l2_penalty},
    validation::check_inputs,
};
use crate::Result;

/// Structured SVM loss, naive implementation (with loops).
///
/// # Arguments
/// * `w` - The weights, shape (D, C).
/// * `x` - A minibatch of data, shape (N, D).
/// * `y` - The labels, `y[i] = c` means that `x[i]` has label `c`, where `0 <= c < C`.
/// * `reg` - The regularization strength.
///
/// # Returns
/// The mean loss plus `reg * sum(W * W)` and the gradient with respect to `w`. The gradient's
/// regularization term is `reg * sum(W * W)` broadcast to every entry (see
/// [`RegGrad::ScalarBroadcast`]).
pub fn svm_loss_naive(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    hinge_naive(w, x, y, reg, DELTA, RegGrad::ScalarBroadcast)
}

pub(crate) fn hinge_naive(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    reg: f64,
    delta: f64,
    reg_grad: RegGrad,
) -> Result<(f64, Array2<f64>)> {
    check_inputs(w, x, y, reg)?;

    let num_classes = w.ncols();
    let num_train = x.nrows();
    let mut dw = Array2::zeros(w.raw_dim());
    let mut loss = 0.0;

    for (i, (xi, &yi)) in x.outer_iter().zip(y).enumerate() {
        let scores = xi.dot(&w);
        let correct_class_score = scores[yi];

        for j in 0..num_classes {
            let margin = scores[j] - correct_class_score + delta;

            let grad = if j == yi {
                // every violated margin pulls the correct class down once
                let violations = scores
                    .iter()
                    .enumerate()
                    .filter(|&(c, &s)| c != yi && s - correct_class_score + delta > 0.0)
                    .count();

                trace!(row = i, violations = violations; "counted violated margins");
                -(violations as f64)
            } else if margin > 0.0 {
                loss += margin;
                1.0
            } else {
                0.0
            };

            dw.column_mut(j).scaled_add(grad, &xi);
        }
    }

    let n = num_train as f64;
    loss /= n;
    dw /= n;

    loss += l2_penalty(w, reg);
    reg_grad.apply(&mut dw, w, reg);

    Ok((loss, dw))
}
