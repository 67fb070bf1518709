// crates/rffs-core/src/format/bytes.rs

use crate::error::{Result, RffError};

/// Longest loader signature we accept on decode.
pub const MAX_STR_LEN: usize = 64;

/// Cursor over a borrowed byte buffer. The enclosing container hands us a
/// reader already positioned at the start of a sampler record.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn at(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.pos)
    }

    fn need(&self, n: usize, what: &str) -> Result<()> {
        if self.remaining() < n {
            return Err(RffError::Decode(format!("unexpected eof reading {what}")));
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize, what: &str) -> Result<&'a [u8]> {
        self.need(n, what)?;
        let out = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, what)?);
        Ok(out)
    }

    pub fn read_u32(&mut self, what: &str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array(what)?))
    }

    pub fn read_i32(&mut self, what: &str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array(what)?))
    }

    pub fn read_f32(&mut self, what: &str) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array(what)?))
    }

    /// u32 length prefix, then ASCII bytes.
    pub fn read_ascii(&mut self, what: &str) -> Result<String> {
        let len = self.read_u32(what)? as usize;
        if len > MAX_STR_LEN {
            return Err(RffError::Decode(format!(
                "{what}: length {len} exceeds {MAX_STR_LEN}"
            )));
        }
        let raw = self.read_bytes(len, what)?;
        if !raw.is_ascii() {
            return Err(RffError::Decode(format!("{what}: not ascii")));
        }
        // ascii is always valid utf-8
        Ok(raw.iter().map(|&b| b as char).collect())
    }
}

pub fn put_u32(b: &mut Vec<u8>, v: u32) {
    b.extend_from_slice(&v.to_le_bytes());
}

pub fn put_i32(b: &mut Vec<u8>, v: i32) {
    b.extend_from_slice(&v.to_le_bytes());
}

pub fn put_f32(b: &mut Vec<u8>, v: f32) {
    b.extend_from_slice(&v.to_le_bytes());
}

pub fn put_ascii(b: &mut Vec<u8>, s: &str) {
    debug_assert!(s.is_ascii() && s.len() <= MAX_STR_LEN);
    put_u32(b, s.len() as u32);
    b.extend_from_slice(s.as_bytes());
}
