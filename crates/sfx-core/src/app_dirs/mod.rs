use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_log_root: PathBuf,
}

impl AppDirs {
    pub fn preferences_file(&self) -> PathBuf {
        self.app_data_root.join("preferences.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_files_live_under_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/sfxdrag"),
            app_log_root: PathBuf::from("/tmp/sfxdrag/logs"),
        };
        assert_eq!(dirs.preferences_file(), PathBuf::from("/tmp/sfxdrag/preferences.json"));
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/sfxdrag/config.toml"));
    }
}
