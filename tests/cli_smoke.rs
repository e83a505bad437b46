use std::path::PathBuf;

use densegrid::{CellGroup, Mode, Storyboard};

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_densegrid")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "densegrid.exe"
            } else {
                "densegrid"
            });
            p
        })
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_cells_writes_sparse_json() {
    let out_path = out_dir("cells").join("cells.json");
    let _ = std::fs::remove_file(&out_path);
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(exe())
        .args(["cells", "--rows", "5", "--cols", "5", "--mode", "sparse"])
        .args(["--out", out_arg.as_str()])
        .status()
        .unwrap();
    assert!(status.success());

    let f = std::fs::File::open(&out_path).unwrap();
    let group: CellGroup = serde_json::from_reader(f).unwrap();
    assert_eq!(group.mode, Mode::Sparse);
    assert_eq!(group.len(), 13);
}

#[test]
fn cli_array_prints_to_stdout() {
    let output = std::process::Command::new(exe())
        .args(["array", "--size", "200", "--rule", "uniform", "--seed", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let group: CellGroup = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(group.len(), 200);
}

#[test]
fn cli_rejects_zero_rows() {
    let output = std::process::Command::new(exe())
        .args(["cells", "--rows", "0", "--cols", "3"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid dimension"), "{stderr}");
}

#[test]
fn cli_storyboard_reads_config() {
    let dir = out_dir("storyboard");
    let out_path = dir.join("board.json");
    let _ = std::fs::remove_file(&out_path);

    let cfg_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("run_config.json");
    let cfg_arg = cfg_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(exe())
        .args(["storyboard", "--config", cfg_arg.as_str(), "--scheme", "daylight"])
        .args(["--out", out_arg.as_str()])
        .status()
        .unwrap();
    assert!(status.success());

    let f = std::fs::File::open(&out_path).unwrap();
    let board: Storyboard = serde_json::from_reader(f).unwrap();
    board.validate().unwrap();
    assert_eq!(
        board.background,
        densegrid::ColorScheme::daylight().background
    );
    assert!(board.object("subtitle").is_some());
}
