use crate::constants::{
    BACKENDS_FILE_NAME, CONFIG_DIR_ENV_VAR, CONFIG_FILE_NAME, PROJECT_NAME, PROJECT_ORG,
    PROJECT_QUALIFIER,
};
use crate::error::{OmnipmError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Config directory, overridable with OMNIPM_CONFIG_DIR
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV_VAR) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let proj = ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORG, PROJECT_NAME)
        .ok_or_else(|| OmnipmError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn backends_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(BACKENDS_FILE_NAME))
}
