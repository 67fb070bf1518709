// crates/rffs-cli/src/io/sampler_file.rs

use anyhow::{Context, Result};
use rffs_core::format::{ByteReader, ModelHeader};
use rffs_core::Sampler;

/// Load a .rffs file holding exactly one sampler record.
pub fn load_rffs(path: &str) -> Result<Sampler> {
    let bytes = std::fs::read(path).with_context(|| format!("read sampler {path}"))?;
    let sampler = Sampler::decode(&bytes).with_context(|| format!("decode sampler {path}"))?;
    Ok(sampler)
}

/// Header only, for inspection of records this build may refuse to load.
pub fn read_header(path: &str) -> Result<(ModelHeader, usize)> {
    let bytes = std::fs::read(path).with_context(|| format!("read sampler {path}"))?;
    let mut r = ByteReader::new(&bytes);
    let header = ModelHeader::read(&mut r).with_context(|| format!("decode header {path}"))?;
    Ok((header, bytes.len()))
}

pub fn save_rffs(path: &str, sampler: &Sampler) -> Result<()> {
    let bytes = sampler.encode().context("encode sampler")?;
    std::fs::write(path, bytes).with_context(|| format!("write sampler {path}"))?;
    Ok(())
}
