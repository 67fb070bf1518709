// crates/rffs-cli/src/cmd/sample.rs

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rffs_core::FourierSampler;

use crate::io::sampler_file;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Input .rffs path
    #[arg(long)]
    pub r#in: String,

    /// Number of frequencies to draw
    #[arg(long, default_value_t = 10)]
    pub n: usize,

    /// Rng seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Print every drawn value (one per line) on stdout
    #[arg(long, default_value_t = false)]
    pub print: bool,
}

pub fn run(args: SampleArgs) -> anyhow::Result<()> {
    let s = sampler_file::load_rffs(&args.r#in)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut sum = 0f64;
    let mut sum_sq = 0f64;
    for _ in 0..args.n {
        let v = s.next(&mut rng);
        if args.print {
            println!("{v}");
        }
        sum += v as f64;
        sum_sq += (v as f64) * (v as f64);
    }

    let n = args.n.max(1) as f64;
    let mean = sum / n;
    let var = (sum_sq / n - mean * mean).max(0.0);

    eprintln!("--- sample ---");
    eprintln!("kernel       = {}", s.kind());
    eprintln!("scaled_param = {}", s.scaled_param());
    eprintln!("seed         = {}", args.seed);
    eprintln!("n            = {}", args.n);
    eprintln!("mean         = {:.6}", mean);
    eprintln!("variance     = {:.6}", var);

    Ok(())
}
