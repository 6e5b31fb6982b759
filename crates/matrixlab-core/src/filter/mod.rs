//! Convolution filters: 3×3 kernels and their application.
//!
//! Two kernels are offered, both summing to 1 so flat regions are left
//! untouched:
//! - **Blur**: box average of the 3×3 neighborhood
//! - **Sharpen**: center 5, four direct neighbors -1
//!
//! Kernels are applied per channel as a correlation (no kernel flip); both
//! built-in kernels are symmetric, so this equals a true convolution.

mod convolve;
mod kernel;

pub use convolve::{apply_filter, apply_kernel, BorderMode};
pub use kernel::{ConvolutionKernel, FilterKind};
