//! Directory resolution.

use std::path::{Path, PathBuf};

const APP_NAME: &str = "abyss";

/// Config directory: the CLI override if given, else `<config_dir>/abyss`,
/// else `./.abyss` when the OS exposes no configuration directory.
pub fn resolve_config_dir(cli_override: Option<&Path>) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_NAME}")))
}

pub fn log_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_config_dir(Some(Path::new("/tmp/abyss-test")));
        assert_eq!(dir, PathBuf::from("/tmp/abyss-test"));
    }

    #[test]
    fn test_default_ends_with_app_name() {
        let dir = resolve_config_dir(None);
        assert!(dir.ends_with(APP_NAME) || dir.ends_with(".abyss"));
    }

    #[test]
    fn test_logs_live_under_config() {
        assert_eq!(log_dir(Path::new("cfg")), PathBuf::from("cfg/logs"));
    }
}
