// crates/rffs-core/src/sampler/config.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RffError};
use crate::sampler::defaults::{DEFAULT_A, DEFAULT_GAMMA};
use crate::sampler::gaussian::GaussianSampler;
use crate::sampler::laplacian::LaplacianSampler;
use crate::sampler::Sampler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Gaussian,
    Laplacian,
}

/// Name -> kernel. Matched case-insensitively; the first entry per kind is canonical.
pub const KERNEL_NAMES: &[(&str, KernelKind)] = &[
    ("Gaussian", KernelKind::Gaussian),
    ("GaussianRandom", KernelKind::Gaussian),
    ("gaussian_kernel", KernelKind::Gaussian),
    ("Laplacian", KernelKind::Laplacian),
    ("LaplacianRandom", KernelKind::Laplacian),
    ("laplacian_kernel", KernelKind::Laplacian),
];

impl KernelKind {
    pub const ALL: [KernelKind; 2] = [KernelKind::Gaussian, KernelKind::Laplacian];

    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Gaussian => "Gaussian",
            KernelKind::Laplacian => "Laplacian",
        }
    }

    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        KERNEL_NAMES
            .iter()
            .filter(move |(_, k)| *k == self)
            .map(|(n, _)| *n)
    }

    /// Name of the tunable this kernel takes.
    pub fn param_name(self) -> &'static str {
        match self {
            KernelKind::Gaussian => "gamma",
            KernelKind::Laplacian => "a",
        }
    }

    pub fn default_config(self) -> SamplerConfig {
        match self {
            KernelKind::Gaussian => SamplerConfig::Gaussian(GaussianConfig::default()),
            KernelKind::Laplacian => SamplerConfig::Laplacian(LaplacianConfig::default()),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = RffError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        KERNEL_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(s))
            .map(|(_, k)| *k)
            .ok_or_else(|| RffError::Config(format!("unknown kernel {s:?}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianConfig {
    pub gamma: f32,
}

impl Default for GaussianConfig {
    fn default() -> Self {
        Self { gamma: DEFAULT_GAMMA }
    }
}

impl GaussianConfig {
    pub fn create(&self, avg_dist: f32) -> Result<GaussianSampler> {
        GaussianSampler::new(self.gamma, avg_dist)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaplacianConfig {
    pub a: f32,
}

impl Default for LaplacianConfig {
    fn default() -> Self {
        Self { a: DEFAULT_A }
    }
}

impl LaplacianConfig {
    pub fn create(&self, avg_dist: f32) -> Result<LaplacianSampler> {
        LaplacianSampler::new(self.a, avg_dist)
    }
}

/// User-facing sampler choice. Produces exactly one [`Sampler`] per call to `create`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplerConfig {
    Gaussian(GaussianConfig),
    Laplacian(LaplacianConfig),
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig::Gaussian(GaussianConfig::default())
    }
}

impl SamplerConfig {
    /// Config for `kind`, overriding its one parameter when given.
    pub fn for_kernel(kind: KernelKind, param: Option<f32>) -> Self {
        match (kind.default_config(), param) {
            (SamplerConfig::Gaussian(_), Some(gamma)) => {
                SamplerConfig::Gaussian(GaussianConfig { gamma })
            }
            (SamplerConfig::Laplacian(_), Some(a)) => {
                SamplerConfig::Laplacian(LaplacianConfig { a })
            }
            (cfg, None) => cfg,
        }
    }

    pub fn kind(&self) -> KernelKind {
        match self {
            SamplerConfig::Gaussian(_) => KernelKind::Gaussian,
            SamplerConfig::Laplacian(_) => KernelKind::Laplacian,
        }
    }

    pub fn param(&self) -> f32 {
        match self {
            SamplerConfig::Gaussian(c) => c.gamma,
            SamplerConfig::Laplacian(c) => c.a,
        }
    }

    /// `avg_dist` is not checked here; a zero or non-finite value surfaces as a
    /// config error from the sampler constructor.
    pub fn create(&self, avg_dist: f32) -> Result<Sampler> {
        match self {
            SamplerConfig::Gaussian(c) => c.create(avg_dist).map(Sampler::Gaussian),
            SamplerConfig::Laplacian(c) => c.create(avg_dist).map(Sampler::Laplacian),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::FourierSampler;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!("gaussian".parse::<KernelKind>().unwrap(), KernelKind::Gaussian);
        assert_eq!("GAUSSIANRANDOM".parse::<KernelKind>().unwrap(), KernelKind::Gaussian);
        assert_eq!(" Laplacian ".parse::<KernelKind>().unwrap(), KernelKind::Laplacian);
        assert_eq!("laplacianrandom".parse::<KernelKind>().unwrap(), KernelKind::Laplacian);
    }

    #[test]
    fn unknown_name_is_config_error() {
        assert!(matches!("polynomial".parse::<KernelKind>(), Err(RffError::Config(_))));
    }

    #[test]
    fn every_kind_has_its_canonical_name_first() {
        for k in KernelKind::ALL {
            assert_eq!(k.aliases().next(), Some(k.name()));
        }
    }

    #[test]
    fn defaults_are_one() {
        assert_eq!(GaussianConfig::default().gamma, 1.0);
        assert_eq!(LaplacianConfig::default().a, 1.0);
        assert_eq!(SamplerConfig::for_kernel(KernelKind::Laplacian, None).param(), 1.0);
    }

    #[test]
    fn factory_picks_variant_and_scales() {
        let cfg = SamplerConfig::for_kernel(KernelKind::Laplacian, Some(0.3));
        let s = cfg.create(2.0).unwrap();
        assert_eq!(s.kind(), KernelKind::Laplacian);
        assert_eq!(s.scaled_param(), 0.3f32 / 2.0f32);

        let s = SamplerConfig::default().create(4.0).unwrap();
        assert_eq!(s.kind(), KernelKind::Gaussian);
        assert_eq!(s.scaled_param(), 0.25);
    }

    #[test]
    fn factory_surfaces_zero_avg_dist() {
        assert!(matches!(SamplerConfig::default().create(0.0), Err(RffError::Config(_))));
    }
}
