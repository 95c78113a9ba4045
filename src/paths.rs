use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "TURNSTILE_CONFIG";

const CONFIG_FILE: &str = "config.yaml";
const LOG_FILE: &str = "turnstile.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "turnstile")
}

/// Returns the config file path.
///
/// Resolution order:
/// 1. `TURNSTILE_CONFIG` environment variable (if set and non-empty)
/// 2. Platform config directory + `config.yaml`
/// 3. `.turnstile/config.yaml` under the working directory
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE),
        None => PathBuf::from(".turnstile").join(CONFIG_FILE),
    }
}

/// Returns the dashboard log file path, or `None` when no data directory
/// can be determined.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_path_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(CONFIG_ENV, "/custom/path/turnstile.yaml") };
        assert_eq!(config_path(), PathBuf::from("/custom/path/turnstile.yaml"));
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }

    #[test]
    #[serial]
    fn test_config_path_default_ends_with_file_name() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var(CONFIG_ENV) };
        assert!(config_path().ends_with(CONFIG_FILE));
    }

    #[test]
    #[serial]
    fn test_empty_env_var_is_ignored() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(CONFIG_ENV, "") };
        assert!(config_path().ends_with(CONFIG_FILE));
        assert_ne!(config_path(), PathBuf::from(""));
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }

    #[test]
    fn test_log_path_names_log_file() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }
}
