use std::path::PathBuf;

use tempfile::TempDir;

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Route scope reporting through `env_logger` once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
