pub mod common;

pub use common::{
    BACKENDS_FILE_NAME, CONFIG_DIR_ENV_VAR, CONFIG_FILE_NAME, LOG_ENV_VAR,
    NAME_PART_SEPARATOR, PROJECT_NAME, PROJECT_ORG, PROJECT_QUALIFIER,
};
