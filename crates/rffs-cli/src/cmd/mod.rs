// crates/rffs-cli/src/cmd/mod.rs

pub mod inspect;
pub mod kernels;
pub mod sample;
pub mod save;
