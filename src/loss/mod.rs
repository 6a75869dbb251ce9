mod loss_fn;
mod naive;
mod regularization;
mod svm;
mod validation;
mod vectorized;

pub use loss_fn::LossFn;
pub use naive::svm_loss_naive;
pub use regularization::{RegGrad, l2_penalty};
pub use svm::{Strategy, SvmLoss};
pub use vectorized::svm_loss_vectorized;

/// The margin the correct class has to win by before it stops being penalized.
pub const DELTA: f64 = 1.0;
