// crates/rffs-core/src/sampler/laplacian.rs

use rand::Rng;
use rand_distr::{Cauchy, Distribution};

use crate::error::{Result, RffError};
use crate::format::{ByteReader, ModelHeader, VersionInfo};
use crate::sampler::config::KernelKind;
use crate::sampler::defaults::LAPLACIAN_VERSION;
use crate::sampler::{check_finite, read_payload, write_record, FourierSampler};

/// Frequencies for `exp(-a * |x| / r)`, whose Fourier dual is Cauchy with scale `a`.
#[derive(Clone, Copy, Debug)]
pub struct LaplacianSampler {
    scaled_a: f32,
    /// Location 0, scale 1; `scaled_a` is applied per draw.
    cauchy: Cauchy<f32>,
}

fn standard_cauchy() -> Result<Cauchy<f32>> {
    Cauchy::new(0.0, 1.0).map_err(|e| RffError::Config(format!("standard cauchy: {e}")))
}

impl PartialEq for LaplacianSampler {
    fn eq(&self, other: &Self) -> bool {
        self.scaled_a == other.scaled_a
    }
}

impl LaplacianSampler {
    pub const VERSION: VersionInfo = LAPLACIAN_VERSION;

    pub fn new(a: f32, avg_dist: f32) -> Result<Self> {
        Self::from_scaled(a / avg_dist)
    }

    pub fn from_scaled(scaled_a: f32) -> Result<Self> {
        let scaled_a = check_finite("scaled a", scaled_a)?;
        Ok(Self { scaled_a, cauchy: standard_cauchy()? })
    }

    pub fn scaled_a(&self) -> f32 {
        self.scaled_a
    }

    pub fn load(r: &mut ByteReader<'_>) -> Result<Self> {
        ModelHeader::read(r)?.check(&Self::VERSION)?;
        Self::read_body(r)
    }

    pub(crate) fn read_body(r: &mut ByteReader<'_>) -> Result<Self> {
        let scaled_a = read_payload(r, "a")?;
        Ok(Self { scaled_a, cauchy: standard_cauchy()? })
    }
}

impl FourierSampler for LaplacianSampler {
    fn kind(&self) -> KernelKind {
        KernelKind::Laplacian
    }

    fn scaled_param(&self) -> f32 {
        self.scaled_a
    }

    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.scaled_a * self.cauchy.sample(rng)
    }

    fn save(&self, out: &mut Vec<u8>) -> Result<()> {
        write_record(&Self::VERSION, "a", self.scaled_a, out)
    }
}
