// crates/rffs-core/src/format/header.rs

use crate::error::{Result, RffError};
use crate::format::bytes::{put_ascii, put_u32, ByteReader};

/// Static description of one record kind and the versions this build reads and writes.
///
/// `version_written` is stamped into new records. `version_readable` is the
/// oldest reader that can still decode what we write. `version_can_read_back`
/// is the oldest record version this build still decodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionInfo {
    pub signature: [u8; 8],
    pub version_written: u32,
    pub version_readable: u32,
    pub version_can_read_back: u32,
    pub loader_signature: &'static str,
}

/// Layout (little-endian):
/// signature[8]
/// version_written:u32
/// version_readable:u32
/// version_can_read_back:u32
/// loader_signature: len:u32 + ascii[len]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelHeader {
    pub signature: [u8; 8],
    pub version_written: u32,
    pub version_readable: u32,
    pub version_can_read_back: u32,
    pub loader_signature: String,
}

impl ModelHeader {
    pub fn for_writing(ver: &VersionInfo) -> Self {
        Self {
            signature: ver.signature,
            version_written: ver.version_written,
            version_readable: ver.version_readable,
            version_can_read_back: ver.version_can_read_back,
            loader_signature: ver.loader_signature.to_string(),
        }
    }

    pub fn write(&self, b: &mut Vec<u8>) {
        b.extend_from_slice(&self.signature);
        put_u32(b, self.version_written);
        put_u32(b, self.version_readable);
        put_u32(b, self.version_can_read_back);
        put_ascii(b, &self.loader_signature);
    }

    pub fn read(r: &mut ByteReader<'_>) -> Result<Self> {
        let signature = r.read_array::<8>("model signature")?;
        let version_written = r.read_u32("version_written")?;
        let version_readable = r.read_u32("version_readable")?;
        let version_can_read_back = r.read_u32("version_can_read_back")?;
        let loader_signature = r.read_ascii("loader signature")?;
        Ok(Self {
            signature,
            version_written,
            version_readable,
            version_can_read_back,
            loader_signature,
        })
    }

    pub fn signature_str(&self) -> String {
        String::from_utf8_lossy(&self.signature).into_owned()
    }

    /// Reject the record unless it was written for `ver`'s component and
    /// falls inside the version window this build understands.
    pub fn check(&self, ver: &VersionInfo) -> Result<()> {
        if self.signature != ver.signature {
            return Err(RffError::Decode(format!(
                "model signature mismatch: expected {:?}, found {:?}",
                String::from_utf8_lossy(&ver.signature),
                self.signature_str()
            )));
        }
        if self.loader_signature != ver.loader_signature {
            return Err(RffError::Decode(format!(
                "loader signature mismatch: expected {:?}, found {:?}",
                ver.loader_signature, self.loader_signature
            )));
        }
        if self.version_readable > self.version_written {
            return Err(RffError::Decode(format!(
                "inconsistent versions: readable {:#010x} > written {:#010x}",
                self.version_readable, self.version_written
            )));
        }
        if self.version_readable > ver.version_written {
            return Err(RffError::Decode(format!(
                "record needs reader version {:#010x}, this build is {:#010x}",
                self.version_readable, ver.version_written
            )));
        }
        if self.version_written < ver.version_can_read_back {
            return Err(RffError::Decode(format!(
                "record version {:#010x} is older than the oldest supported {:#010x}",
                self.version_written, ver.version_can_read_back
            )));
        }
        Ok(())
    }
}
