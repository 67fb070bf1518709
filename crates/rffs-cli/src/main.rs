// crates/rffs-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "rffs-cli")]
#[command(about = "Random Fourier feature sampler tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a sampler from kernel config + average distance and write it (.rffs)
    Save(cmd::save::SaveArgs),

    /// Inspect a sampler record (header, versions, scaled parameter, record id)
    Inspect(cmd::inspect::InspectArgs),

    /// Load a sampler record and draw frequencies with a seeded rng
    Sample(cmd::sample::SampleArgs),

    /// List kernel names and aliases
    Kernels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Save(args) => cmd::save::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Sample(args) => cmd::sample::run(args),
        Commands::Kernels => cmd::kernels::run(),
    }
}
