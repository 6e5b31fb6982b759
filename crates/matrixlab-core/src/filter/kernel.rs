//! 3×3 convolution kernels.

use serde::{Deserialize, Serialize};

/// A 3×3 matrix of real weights, indexed `[row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionKernel {
    weights: [[f64; 3]; 3],
}

impl ConvolutionKernel {
    /// Create a kernel from explicit weights.
    pub fn new(weights: [[f64; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Normalized box blur: every weight is 1/9.
    pub fn blur() -> Self {
        Self::new([[1.0 / 9.0; 3]; 3])
    }

    /// Sharpen: 5 at the center, -1 on the four direct neighbors.
    pub fn sharpen() -> Self {
        Self::new([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]])
    }

    pub fn weights(&self) -> [[f64; 3]; 3] {
        self.weights
    }

    /// Weight for the neighbor at offset `(dx, dy)`, each in -1..=1.
    #[inline]
    pub fn weight(&self, dx: i64, dy: i64) -> f64 {
        self.weights[(dy + 1) as usize][(dx + 1) as usize]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }
}

/// The filters the lab offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Blur,
    Sharpen,
}

impl FilterKind {
    pub const ALL: [FilterKind; 2] = [FilterKind::Blur, FilterKind::Sharpen];

    /// Display name for the filter picker.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Blur => "Blur",
            FilterKind::Sharpen => "Sharpen",
        }
    }

    /// Serialized name.
    pub fn key(self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
        }
    }

    /// Parse a serialized name, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn kernel(self) -> ConvolutionKernel {
        match self {
            FilterKind::Blur => ConvolutionKernel::blur(),
            FilterKind::Sharpen => ConvolutionKernel::sharpen(),
        }
    }
}
