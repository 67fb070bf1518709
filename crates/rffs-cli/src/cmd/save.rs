// crates/rffs-cli/src/cmd/save.rs

use anyhow::{bail, Context};
use clap::Args;
use rffs_core::{FourierSampler, KernelKind, SamplerConfig};

use crate::io::sampler_file;

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Kernel name or alias (see `kernels`)
    #[arg(long, default_value = "Gaussian")]
    pub kernel: String,

    /// Gaussian bandwidth (default 1.0)
    #[arg(long, short = 'g')]
    pub gamma: Option<f32>,

    /// Laplacian scale (default 1.0)
    #[arg(long)]
    pub a: Option<f32>,

    /// Average pairwise distance of the training set
    #[arg(long)]
    pub avg_dist: f32,

    /// Output path (.rffs)
    #[arg(long)]
    pub out: String,
}

pub fn run(args: SaveArgs) -> anyhow::Result<()> {
    let kind: KernelKind = args
        .kernel
        .parse()
        .with_context(|| format!("resolve --kernel {}", args.kernel))?;

    let param = match kind {
        KernelKind::Gaussian => {
            if args.a.is_some() {
                bail!("--a does not apply to the {kind} kernel (use --gamma)");
            }
            args.gamma
        }
        KernelKind::Laplacian => {
            if args.gamma.is_some() {
                bail!("--gamma does not apply to the {kind} kernel (use --a)");
            }
            args.a
        }
    };

    let cfg = SamplerConfig::for_kernel(kind, param);
    let sampler = cfg
        .create(args.avg_dist)
        .with_context(|| format!("build {kind} sampler (avg_dist={})", args.avg_dist))?;

    sampler_file::save_rffs(&args.out, &sampler)?;

    eprintln!("--- save ---");
    eprintln!("kernel       = {}", kind);
    eprintln!("{:<12} = {}", kind.param_name(), cfg.param());
    eprintln!("avg_dist     = {}", args.avg_dist);
    eprintln!("scaled_param = {}", sampler.scaled_param());
    eprintln!("record_id    = {}", sampler.record_id_hex()?);
    eprintln!("out          = {}", args.out);

    Ok(())
}
