// crates/rffs-cli/src/cmd/kernels.rs

use rffs_core::KernelKind;

pub fn run() -> anyhow::Result<()> {
    for k in KernelKind::ALL {
        let aliases: Vec<&str> = k.aliases().collect();
        println!("{:<10} param={:<6} aliases={}", k.name(), k.param_name(), aliases.join(","));
    }
    Ok(())
}
