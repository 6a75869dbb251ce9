pub mod config;
pub mod error;
pub mod gradient_check;
pub mod init;
pub mod loss;

pub use config::SvmLossConfig;
pub use error::{Result, SvmErr};
pub use loss::{LossFn, RegGrad, Strategy, SvmLoss, svm_loss_naive, svm_loss_vectorized};
