pub mod error;

pub mod format;
pub mod sampler;

pub use crate::error::{Result, RffError};
pub use crate::sampler::config::{GaussianConfig, KernelKind, LaplacianConfig, SamplerConfig};
pub use crate::sampler::gaussian::GaussianSampler;
pub use crate::sampler::laplacian::LaplacianSampler;
pub use crate::sampler::{FourierSampler, Sampler};
