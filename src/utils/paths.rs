use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_tido_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".tido"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let tido_dir = get_tido_dir()?;
    Ok(tido_dir.join("config.toml"))
}

pub fn get_pid_file_path() -> Result<PathBuf> {
    let tido_dir = get_tido_dir()?;
    Ok(tido_dir.join("server.pid"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let tido_dir = get_tido_dir()?;
    Ok(tido_dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let tido_dir = get_tido_dir()?;
    Ok(tido_dir.join("crash.log"))
}
