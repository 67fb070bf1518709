// crates/rffs-core/src/sampler/gaussian.rs

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::Result;
use crate::format::{ByteReader, ModelHeader, VersionInfo};
use crate::sampler::config::KernelKind;
use crate::sampler::defaults::GAUSSIAN_VERSION;
use crate::sampler::{check_finite, read_payload, write_record, FourierSampler};

/// Frequencies for `exp(-gamma * |x - y|^2 / r^2)`.
///
/// The Fourier dual of this kernel is a normal distribution with standard
/// deviation `sqrt(2 * gamma)`, where gamma has already been divided by the
/// average pairwise distance of the training set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianSampler {
    scaled_gamma: f32,
}

impl GaussianSampler {
    pub const VERSION: VersionInfo = GAUSSIAN_VERSION;

    /// Only finiteness is checked, here and on load. A negative gamma is kept
    /// as given and every draw from it is NaN.
    pub fn new(gamma: f32, avg_dist: f32) -> Result<Self> {
        Self::from_scaled(gamma / avg_dist)
    }

    pub fn from_scaled(scaled_gamma: f32) -> Result<Self> {
        let scaled_gamma = check_finite("scaled gamma", scaled_gamma)?;
        Ok(Self { scaled_gamma })
    }

    pub fn scaled_gamma(&self) -> f32 {
        self.scaled_gamma
    }

    /// NaN when `scaled_gamma < 0`.
    pub fn std_dev(&self) -> f32 {
        (2.0 * self.scaled_gamma).sqrt()
    }

    /// Header, then payload. Fails if the record belongs to another sampler.
    pub fn load(r: &mut ByteReader<'_>) -> Result<Self> {
        ModelHeader::read(r)?.check(&Self::VERSION)?;
        Self::read_body(r)
    }

    pub(crate) fn read_body(r: &mut ByteReader<'_>) -> Result<Self> {
        let scaled_gamma = read_payload(r, "gamma")?;
        Ok(Self { scaled_gamma })
    }
}

impl FourierSampler for GaussianSampler {
    fn kind(&self) -> KernelKind {
        KernelKind::Gaussian
    }

    fn scaled_param(&self) -> f32 {
        self.scaled_gamma
    }

    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let g: f32 = StandardNormal.sample(rng);
        g * self.std_dev()
    }

    fn save(&self, out: &mut Vec<u8>) -> Result<()> {
        write_record(&Self::VERSION, "gamma", self.scaled_gamma, out)
    }
}
