//! Directory helpers following the XDG Base Directory specification
//!
//! The app persists nothing the user selects; the only file it ever
//! writes is the log under the state directory.

use directories::ProjectDirs;
use std::path::PathBuf;

pub fn get_state_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "fwlearn", "fwlearn")
        .and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    if let Some(dir) = get_state_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
