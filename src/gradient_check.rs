use log::debug;
use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::{Result, SvmErr};

/// The outcome of comparing one entry of an analytic gradient against its numerical estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheck {
    pub index: (usize, usize),
    pub numerical: f64,
    pub analytic: f64,
    pub relative_error: f64,
}

/// `|a - b| / (|a| + |b|)`, zero when both are zero.
pub fn relative_error(a: f64, b: f64) -> f64 {
    let denom = a.abs() + b.abs();
    if denom == 0.0 {
        return 0.0;
    }

    (a - b).abs() / denom
}

fn centered_difference<F>(f: &F, w: &mut Array2<f64>, index: (usize, usize), h: f64) -> Result<f64>
where
    F: Fn(ArrayView2<f64>) -> Result<f64>,
{
    let old = w[index];

    w[index] = old + h;
    let fxph = f(w.view())?;
    w[index] = old - h;
    let fxmh = f(w.view())?;
    w[index] = old;

    Ok((fxph - fxmh) / (2.0 * h))
}

/// Estimates the gradient of `f` at `w` with centered finite differences over every entry.
///
/// # Arguments
/// * `f` - The function, usually a loss evaluated at fixed data.
/// * `w` - The point the gradient is estimated at.
/// * `h` - The step.
///
/// # Returns
/// The numerical gradient, same shape as `w`, or the first error `f` returned.
pub fn numerical_gradient<F>(f: F, w: ArrayView2<f64>, h: f64) -> Result<Array2<f64>>
where
    F: Fn(ArrayView2<f64>) -> Result<f64>,
{
    let mut w = w.to_owned();
    let mut grad = Array2::zeros(w.raw_dim());

    for index in ndarray::indices(w.raw_dim()) {
        grad[index] = centered_difference(&f, &mut w, index, h)?;
    }

    Ok(grad)
}

/// Compares `num_checks` randomly sampled entries of an analytic gradient against their
/// numerical estimates.
///
/// # Arguments
/// * `f` - The function the gradient belongs to.
/// * `w` - The point the gradient was computed at.
/// * `analytic` - The analytic gradient.
/// * `num_checks` - How many entries to sample, with replacement.
/// * `h` - The finite difference step.
/// * `rng` - The source of the sampled entries.
///
/// # Returns
/// One `GradCheck` per sampled entry.
pub fn grad_check_sparse<F, R>(
    f: F,
    w: ArrayView2<f64>,
    analytic: ArrayView2<f64>,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Result<Vec<GradCheck>>
where
    F: Fn(ArrayView2<f64>) -> Result<f64>,
    R: Rng,
{
    if analytic.dim() != w.dim() {
        return Err(SvmErr::DimensionMismatch {
            what: "analytic gradient and weights",
            got: analytic.len(),
            expected: w.len(),
        });
    }

    if w.is_empty() {
        return Ok(Vec::new());
    }

    let (rows, cols) = w.dim();
    let mut w = w.to_owned();

    (0..num_checks)
        .map(|_| {
            let index = (rng.random_range(0..rows), rng.random_range(0..cols));
            let numerical = centered_difference(&f, &mut w, index, h)?;
            let exact = analytic[index];
            let relative_error = relative_error(numerical, exact);

            debug!(
                row = index.0,
                col = index.1,
                numerical = numerical,
                analytic = exact,
                relative_error = relative_error;
                "gradient check"
            );

            Ok(GradCheck {
                index,
                numerical,
                analytic: exact,
                relative_error,
            })
        })
        .collect()
}
