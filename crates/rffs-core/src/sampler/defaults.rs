// crates/rffs-core/src/sampler/defaults.rs

use crate::format::VersionInfo;

/// Initial record format, shared by both samplers.
pub const VERSION_INITIAL: u32 = 0x0001_0001;

pub const DEFAULT_GAMMA: f32 = 1.0;
pub const DEFAULT_A: f32 = 1.0;

pub const GAUSSIAN_VERSION: VersionInfo = VersionInfo {
    signature: *b"RND GAUS",
    version_written: VERSION_INITIAL,
    version_readable: VERSION_INITIAL,
    version_can_read_back: VERSION_INITIAL,
    loader_signature: "RandGaussFourierExec",
};

pub const LAPLACIAN_VERSION: VersionInfo = VersionInfo {
    signature: *b"RND LPLC",
    version_written: VERSION_INITIAL,
    version_readable: VERSION_INITIAL,
    version_can_read_back: VERSION_INITIAL,
    loader_signature: "RandLaplacianFourierExec",
};
