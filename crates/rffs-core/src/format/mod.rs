// crates/rffs-core/src/format/mod.rs

pub mod bytes;
pub mod checksum;
pub mod header;

pub use bytes::ByteReader;
pub use header::{ModelHeader, VersionInfo};

/// Byte width of the stored parameter. Written as the size tag ahead of every payload.
pub const FLOAT_WIDTH: i32 = std::mem::size_of::<f32>() as i32;
