// crates/rffs-cli/src/cmd/inspect.rs

use clap::Args;
use rffs_core::FourierSampler;

use crate::io::sampler_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .rffs path
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    // Header first so a record we refuse to load still shows what it claims to be.
    let (h, file_len) = sampler_file::read_header(&args.r#in)?;

    println!("file                  = {}", args.r#in);
    println!("file_bytes            = {}", file_len);
    println!("signature             = {:?}", h.signature_str());
    println!("loader_signature      = {}", h.loader_signature);
    println!("version_written       = {:#010x}", h.version_written);
    println!("version_readable      = {:#010x}", h.version_readable);
    println!("version_can_read_back = {:#010x}", h.version_can_read_back);

    let s = sampler_file::load_rffs(&args.r#in)?;
    let kind = s.kind();

    println!("kernel                = {}", kind);
    println!("scaled_{:<15}= {}", kind.param_name(), s.scaled_param());
    println!("record_id             = {}", s.record_id_hex()?);
    println!("record_crc32          = {:08x}", s.record_crc32()?);

    Ok(())
}
