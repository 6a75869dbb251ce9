use log::trace;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};

use super::{
    DELTA,
    regularization::{RegGrad, l2_penalty},
    validation::check_inputs,
};
use crate::Result;

/// Clamps a margin to be non-negative, letting NaN through like `max(0, NaN)` on arrays does.
fn hinge(margin: f64) -> f64 {
    if margin < 0.0 { 0.0 } else { margin }
}

/// Marks a violated margin with 1, letting NaN through so it reaches the gradient.
fn violated(margin: f64) -> f64 {
    if margin > 0.0 {
        1.0
    } else if margin.is_nan() {
        margin
    } else {
        0.0
    }
}

/// Structured SVM loss, vectorized implementation.
///
/// Inputs and outputs are the same as [`svm_loss_naive`](super::svm_loss_naive), except that
/// the returned gradient carries no regularization term at all (see [`RegGrad::Omitted`]).
pub fn svm_loss_vectorized(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    hinge_vectorized(w, x, y, reg, DELTA, RegGrad::Omitted)
}

pub(crate) fn hinge_vectorized(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    reg: f64,
    delta: f64,
    reg_grad: RegGrad,
) -> Result<(f64, Array2<f64>)> {
    check_inputs(w, x, y, reg)?;

    let n = x.nrows() as f64;

    // (N, D) dot (D, C) = (N, C)
    let scores = x.dot(&w);
    let correct_scores: Array1<f64> = y
        .iter()
        .zip(scores.rows())
        .map(|(&yi, row)| row[yi])
        .collect();

    let mut margins = &scores - &correct_scores.insert_axis(Axis(1)) + delta;
    margins.par_mapv_inplace(hinge);
    Zip::from(margins.rows_mut())
        .and(&y)
        .for_each(|mut row, &yi| row[yi] = 0.0);

    let mut loss = margins.sum() / n;

    let mut indicator = margins.mapv(violated);
    let violations = indicator.sum_axis(Axis(1));
    trace!(violations = violations.sum(); "counted violated margins");

    Zip::from(indicator.rows_mut())
        .and(&y)
        .and(&violations)
        .for_each(|mut row, &yi, &count| row[yi] = -count);

    // (D, N) dot (N, C) = (D, C)
    let mut dw = x.t().dot(&indicator) / n;

    loss += l2_penalty(w, reg);
    reg_grad.apply(&mut dw, w, reg);

    Ok((loss, dw))
}

#[cfg(test)]
mod test {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_hinge_clamps_negatives_only() {
        assert_eq!(hinge(-0.5), 0.0);
        assert_eq!(hinge(0.0), 0.0);
        assert_eq!(hinge(2.5), 2.5);
        assert!(hinge(f64::NAN).is_nan());
    }

    #[test]
    fn test_violated_marks_positive_margins_and_keeps_nan() {
        assert_eq!(violated(-1.0), 0.0);
        assert_eq!(violated(0.0), 0.0);
        assert_eq!(violated(0.25), 1.0);
        assert!(violated(f64::NAN).is_nan());
    }

    #[test]
    fn test_single_example_two_classes() {
        let w = array![[1.0, 0.0], [0.0, 1.0]];
        let x = array![[1.0, 1.0]];
        let y = array![0];

        let (loss, dw) = svm_loss_vectorized(w.view(), x.view(), y.view(), 0.0).unwrap();

        assert_eq!(loss, 1.0);
        assert_eq!(dw, array![[-1.0, 1.0], [-1.0, 1.0]]);
    }

    #[test]
    fn test_two_examples_with_mixed_violations() {
        // scores: [[2, 1.5, -3], [-2, -1.5, 3]], labels [0, 2]
        let w = array![[2.0, 1.5, -3.0]];
        let x = array![[1.0], [-1.0]];
        let y = array![0, 2];

        let (loss, dw) = svm_loss_vectorized(w.view(), x.view(), y.view(), 0.0).unwrap();

        // only the first example violates, by 0.5, averaged over two examples
        assert_eq!(loss, 0.25);
        assert_eq!(dw, array![[-0.5, 0.5, 0.0]]);
    }

    #[test]
    fn test_regularization_is_left_out_of_gradient() {
        let w = array![[2.0, 1.5, -3.0]];
        let x = array![[1.0]];
        let y = array![0];
        let reg = 0.1;

        let (loss, dw) = svm_loss_vectorized(w.view(), x.view(), y.view(), reg).unwrap();

        assert!((loss - (0.5 + reg * 15.25)).abs() < 1e-12);
        assert_eq!(dw, array![[-1.0, 1.0, 0.0]]);
    }
}
