use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rffs-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn save_then_inspect_gaussian() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("g.rffs");

    run_ok(cli().args([
        "save",
        "--kernel",
        "gaussian",
        "--gamma",
        "0.5",
        "--avg-dist",
        "2",
        "--out",
        path_str(&f),
    ]));

    let bytes = std::fs::read(&f).unwrap();
    assert_eq!(&bytes[0..8], b"RND GAUS");
    let n = bytes.len();
    assert_eq!(&bytes[n - 4..], &0.25f32.to_le_bytes());

    let out = run_ok(cli().args(["inspect", "--in", path_str(&f)]));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("RandGaussFourierExec"), "{stdout}");
    assert!(stdout.contains("kernel                = Gaussian"), "{stdout}");
    assert!(stdout.contains("0x00010001"), "{stdout}");
}

#[test]
fn laplacian_alias_and_default_param() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("l.rffs");

    run_ok(cli().args([
        "save",
        "--kernel",
        "LaplacianRandom",
        "--avg-dist",
        "4",
        "--out",
        path_str(&f),
    ]));

    let bytes = std::fs::read(&f).unwrap();
    assert_eq!(&bytes[0..8], b"RND LPLC");
    let n = bytes.len();
    assert_eq!(&bytes[n - 4..], &0.25f32.to_le_bytes());
}

#[test]
fn sample_is_deterministic_for_a_seed() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("g.rffs");
    run_ok(cli().args(["save", "--avg-dist", "1", "--out", path_str(&f)]));

    let draw = |seed: &str| {
        let out = run_ok(cli().args([
            "sample",
            "--in",
            path_str(&f),
            "--n",
            "16",
            "--seed",
            seed,
            "--print",
        ]));
        String::from_utf8_lossy(&out.stdout).into_owned()
    };

    let a = draw("9");
    assert_eq!(a.lines().count(), 16);
    assert_eq!(a, draw("9"));
    assert_ne!(a, draw("10"));
}

#[test]
fn corrupt_size_tag_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("g.rffs");
    run_ok(cli().args(["save", "--avg-dist", "1", "--out", path_str(&f)]));

    let mut bytes = std::fs::read(&f).unwrap();
    let n = bytes.len();
    bytes[n - 8..n - 4].copy_from_slice(&8i32.to_le_bytes());
    std::fs::write(&f, &bytes).unwrap();

    let out = cli().args(["sample", "--in", path_str(&f)]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("width tag"), "{stderr}");
}

#[test]
fn rejects_mismatched_parameter_and_unknown_kernel() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("x.rffs");

    let out = cli()
        .args([
            "save",
            "--kernel",
            "Laplacian",
            "--gamma",
            "1",
            "--avg-dist",
            "1",
            "--out",
            path_str(&f),
        ])
        .output()
        .unwrap();
    assert!(!out.status.success());

    let out = cli()
        .args(["save", "--kernel", "polynomial", "--avg-dist", "1", "--out", path_str(&f)])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(!f.exists());
}

#[test]
fn zero_avg_dist_is_refused() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("z.rffs");
    let out = cli()
        .args(["save", "--avg-dist", "0", "--out", path_str(&f)])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(!f.exists());
}

#[test]
fn kernels_lists_both() {
    let out = run_ok(cli().arg("kernels"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("GaussianRandom"));
    assert!(stdout.contains("LaplacianRandom"));
}
