// Common constants used throughout the codebase

/// Project name
pub const PROJECT_NAME: &str = "omnipm";

/// Project organization (reverse domain notation)
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORG: &str = "omnipm";

/// Settings file name
pub const CONFIG_FILE_NAME: &str = "config.kdl";

/// User-defined backends file name
pub const BACKENDS_FILE_NAME: &str = "backends.kdl";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "OMNIPM_LOG";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV_VAR: &str = "OMNIPM_CONFIG_DIR";

/// Separator between the parts of a backend name, alias or language hint
pub const NAME_PART_SEPARATOR: char = '-';
