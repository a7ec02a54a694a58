use crate::core::error::FileNavigatorError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, FileNavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(FileNavigatorError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .map(|home| home.join("Library/Application Support"))
            .ok_or(FileNavigatorError::ConfigDirectoryNotFound)?,
        _ => dirs::config_dir().ok_or(FileNavigatorError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("file-navigator"))
}

pub fn get_config_file() -> Result<PathBuf, FileNavigatorError> {
    Ok(get_config_directory()?.join("config.json"))
}

pub fn get_home_directory() -> Result<PathBuf, FileNavigatorError> {
    dirs::home_dir().ok_or(FileNavigatorError::HomeDirectoryNotFound)
}
