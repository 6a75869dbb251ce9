use log::warn;
use ndarray::{ArrayView1, ArrayView2};

use crate::{Result, SvmErr};

/// Checks that the weights, the data and the labels agree with each other before evaluating the
/// loss over them.
///
/// # Arguments
/// * `w` - The weights, shape (D, C).
/// * `x` - The data, shape (N, D).
/// * `y` - The labels, length N.
/// * `reg` - The regularization strength.
///
/// # Returns
/// An error if the shapes don't line up, the batch is empty or any label isn't a valid class.
pub(crate) fn check_inputs(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    reg: f64,
) -> Result<()> {
    if x.ncols() != w.nrows() {
        return Err(SvmErr::DimensionMismatch {
            what: "data columns and weight rows",
            got: x.ncols(),
            expected: w.nrows(),
        });
    }

    if y.len() != x.nrows() {
        return Err(SvmErr::DimensionMismatch {
            what: "labels and data rows",
            got: y.len(),
            expected: x.nrows(),
        });
    }

    if x.nrows() == 0 {
        return Err(SvmErr::EmptyBatch);
    }

    let classes = w.ncols();
    if let Some((row, &label)) = y.iter().enumerate().find(|&(_, &label)| label >= classes) {
        return Err(SvmErr::IndexOutOfRange {
            row,
            label,
            classes,
        });
    }

    if reg < 0.0 {
        warn!(reg = reg; "negative regularization strength, the penalty will reward large weights");
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use ndarray::{Array1, Array2, array};

    use super::*;

    #[test]
    fn test_well_formed_inputs_pass() {
        let w = Array2::<f64>::zeros((3, 4));
        let x = Array2::<f64>::zeros((2, 3));
        let y = array![0, 3];

        assert!(check_inputs(w.view(), x.view(), y.view(), 0.1).is_ok());
    }

    #[test]
    fn test_data_and_weights_mismatch() {
        let w = Array2::<f64>::zeros((3, 4));
        let x = Array2::<f64>::zeros((2, 5));
        let y = array![0, 1];

        let err = check_inputs(w.view(), x.view(), y.view(), 0.0).unwrap_err();
        assert!(matches!(
            err,
            SvmErr::DimensionMismatch {
                got: 5,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_labels_and_data_mismatch() {
        let w = Array2::<f64>::zeros((3, 4));
        let x = Array2::<f64>::zeros((2, 3));
        let y = array![0, 1, 2];

        let err = check_inputs(w.view(), x.view(), y.view(), 0.0).unwrap_err();
        assert!(matches!(
            err,
            SvmErr::DimensionMismatch {
                got: 3,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_label_out_of_range() {
        let w = Array2::<f64>::zeros((3, 4));
        let x = Array2::<f64>::zeros((3, 3));
        let y = array![0, 4, 1];

        let err = check_inputs(w.view(), x.view(), y.view(), 0.0).unwrap_err();
        assert!(matches!(
            err,
            SvmErr::IndexOutOfRange {
                row: 1,
                label: 4,
                classes: 4
            }
        ));
    }

    #[test]
    fn test_empty_batch() {
        let w = Array2::<f64>::zeros((3, 4));
        let x = Array2::<f64>::zeros((0, 3));
        let y = Array1::<usize>::zeros(0);

        let err = check_inputs(w.view(), x.view(), y.view(), 0.0).unwrap_err();
        assert!(matches!(err, SvmErr::EmptyBatch));
    }
}
