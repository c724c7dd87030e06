pub mod misclassification;

pub use misclassification::calc_error;
