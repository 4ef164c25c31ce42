use std::env;
use std::path::{Path, PathBuf};

pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if looks_like_repo_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find repository root (no workspace Cargo.toml/.git found)");
        }
    }
}

fn looks_like_repo_root(dir: &Path) -> bool {
    if dir.join(".git").is_dir() {
        return true;
    }
    match std::fs::read_to_string(dir.join("Cargo.toml")) {
        Ok(contents) => contents.contains("[workspace]"),
        Err(_) => false,
    }
}
