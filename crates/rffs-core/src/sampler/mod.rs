// crates/rffs-core/src/sampler/mod.rs

pub mod config;
pub mod defaults;
pub mod gaussian;
pub mod laplacian;

use rand::Rng;

use crate::error::{Result, RffError};
use crate::format::bytes::{put_f32, put_i32};
use crate::format::checksum::{record_crc32, record_digest_16, to_hex};
use crate::format::{ByteReader, ModelHeader, VersionInfo, FLOAT_WIDTH};
use crate::sampler::config::KernelKind;
use crate::sampler::gaussian::GaussianSampler;
use crate::sampler::laplacian::LaplacianSampler;

/// Draws frequencies for one shift-invariant kernel and persists its single
/// scaled parameter.
pub trait FourierSampler {
    fn kind(&self) -> KernelKind;

    /// The parameter after division by the average distance.
    fn scaled_param(&self) -> f32;

    /// One frequency. Only `rng` is mutated.
    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> f32;

    /// Append `[header][size tag][f32]` to `out`. Nothing is written on error.
    fn save(&self, out: &mut Vec<u8>) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sampler {
    Gaussian(GaussianSampler),
    Laplacian(LaplacianSampler),
}

impl Sampler {
    /// Load whichever sampler the record header names.
    pub fn load(r: &mut ByteReader<'_>) -> Result<Self> {
        let header = ModelHeader::read(r)?;
        if header.signature == GaussianSampler::VERSION.signature {
            header.check(&GaussianSampler::VERSION)?;
            GaussianSampler::read_body(r).map(Sampler::Gaussian)
        } else if header.signature == LaplacianSampler::VERSION.signature {
            header.check(&LaplacianSampler::VERSION)?;
            LaplacianSampler::read_body(r).map(Sampler::Laplacian)
        } else {
            Err(RffError::Decode(format!(
                "unknown sampler signature {:?}",
                header.signature_str()
            )))
        }
    }

    /// Encode into a fresh buffer.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(64);
        self.save(&mut out)?;
        Ok(out)
    }

    /// Decode a buffer holding exactly one record.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(bytes);
        let s = Self::load(&mut r)?;
        if r.remaining() != 0 {
            return Err(RffError::Decode(format!(
                "{} trailing bytes after sampler record",
                r.remaining()
            )));
        }
        Ok(s)
    }

    /// Digest of the encoded record. Equal ids mean byte-identical records.
    pub fn record_id_16(&self) -> Result<[u8; 16]> {
        Ok(record_digest_16(&self.encode()?))
    }

    pub fn record_id_hex(&self) -> Result<String> {
        Ok(to_hex(&self.record_id_16()?))
    }

    pub fn record_crc32(&self) -> Result<u32> {
        Ok(record_crc32(&self.encode()?))
    }
}

impl FourierSampler for Sampler {
    fn kind(&self) -> KernelKind {
        match self {
            Sampler::Gaussian(s) => s.kind(),
            Sampler::Laplacian(s) => s.kind(),
        }
    }

    fn scaled_param(&self) -> f32 {
        match self {
            Sampler::Gaussian(s) => s.scaled_param(),
            Sampler::Laplacian(s) => s.scaled_param(),
        }
    }

    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match self {
            Sampler::Gaussian(s) => s.next(rng),
            Sampler::Laplacian(s) => s.next(rng),
        }
    }

    fn save(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Sampler::Gaussian(s) => s.save(out),
            Sampler::Laplacian(s) => s.save(out),
        }
    }
}

impl From<GaussianSampler> for Sampler {
    fn from(s: GaussianSampler) -> Self {
        Sampler::Gaussian(s)
    }
}

impl From<LaplacianSampler> for Sampler {
    fn from(s: LaplacianSampler) -> Self {
        Sampler::Laplacian(s)
    }
}

pub(crate) fn check_finite(name: &str, v: f32) -> Result<f32> {
    if !v.is_finite() {
        return Err(RffError::Config(format!("{name} must be finite, got {v}")));
    }
    Ok(v)
}

pub(crate) fn write_record(ver: &VersionInfo, name: &str, v: f32, out: &mut Vec<u8>) -> Result<()> {
    if !v.is_finite() {
        return Err(RffError::Invariant(format!(
            "{}: {name} is {v} at save time",
            ver.loader_signature
        )));
    }
    ModelHeader::for_writing(ver).write(out);
    put_i32(out, FLOAT_WIDTH);
    put_f32(out, v);
    Ok(())
}

pub(crate) fn read_payload(r: &mut ByteReader<'_>, name: &str) -> Result<f32> {
    let width = r.read_i32("float width tag")?;
    if width != FLOAT_WIDTH {
        return Err(RffError::Decode(format!(
            "float width tag is {width}, expected {FLOAT_WIDTH}"
        )));
    }
    let v = r.read_f32(name)?;
    if !v.is_finite() {
        return Err(RffError::Decode(format!("{name} is not finite ({v})")));
    }
    Ok(v)
}
