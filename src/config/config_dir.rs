//! Config file discovery.
//!
//! `LINGUA_CONFIG` wins when set. Otherwise debug builds read `./config.toml`, release builds
//! look under the per-user config directory and fall back to `./config.toml`.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use super::error::{ConfigError, ConfigResult};

const CONFIG_FILE: &str = "config.toml";
const CONFIG_PATH_VAR: &str = "LINGUA_CONFIG";

/// Where the config would be read from. The file may not exist.
pub fn find_config_file(use_local: bool) -> PathBuf {
    #[cfg(unix)]
    let home = std::env::var_os("HOME");
    #[cfg(windows)]
    let home = std::env::var_os("APPDATA");
    #[cfg(not(any(unix, windows)))]
    let home = None;

    let search = Search {
        explicit: std::env::var_os(CONFIG_PATH_VAR),
        home,
        use_local,
    };
    search.resolve()
}

struct Search {
    explicit: Option<OsString>,
    home: Option<OsString>,
    use_local: bool,
}

impl Search {
    fn resolve(self) -> PathBuf {
        if let Some(path) = self.explicit.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        let local = Path::new(".").join(CONFIG_FILE);
        if self.use_local {
            return local;
        }

        let Some(home) = self.home else {
            return local;
        };

        let mut user_dir = PathBuf::from(home);
        if cfg!(unix) {
            user_dir.push(".config");
        }
        let user_file = user_dir.join(crate::APPLICATION_NAME).join(CONFIG_FILE);

        if user_file.is_file() { user_file } else { local }
    }
}

pub fn read_config(use_local: bool) -> ConfigResult<Vec<u8>> {
    read_config_from(&find_config_file(use_local))
}

fn read_config_from(path: &Path) -> ConfigResult<Vec<u8>> {
    tracing::trace!("looking for config at: {}", path.display());
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound);
    }

    let path = path.canonicalize()?;
    tracing::debug!("using {} as configuration file", path.display());
    Ok(std::fs::read(path)?)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    fn search(explicit: Option<&Path>, home: Option<&Path>, use_local: bool) -> PathBuf {
        Search {
            explicit: explicit.map(|p| p.as_os_str().to_owned()),
            home: home.map(|p| p.as_os_str().to_owned()),
            use_local,
        }
        .resolve()
    }

    fn user_config(home: &Path) -> PathBuf {
        let mut dir = home.to_path_buf();
        if cfg!(unix) {
            dir.push(".config");
        }
        let dir = dir.join(crate::APPLICATION_NAME);
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join(CONFIG_FILE);
        fs::write(&file, "[host]\nbindto = \"0.0.0.0:1\"").unwrap();
        file
    }

    #[test]
    fn local_in_debug() {
        let home = tempfile::tempdir().unwrap();
        user_config(home.path());
        assert_eq!(search(None, Some(home.path()), true), PathBuf::from("./config.toml"));
    }

    #[test]
    fn user_dir_in_release() {
        let home = tempfile::tempdir().unwrap();
        let file = user_config(home.path());
        assert_eq!(search(None, Some(home.path()), false), file);
    }

    #[test]
    fn falls_back_to_local_without_user_file() {
        let home = tempfile::tempdir().unwrap();
        assert_eq!(search(None, Some(home.path()), false), PathBuf::from("./config.toml"));
        assert_eq!(search(None, None, false), PathBuf::from("./config.toml"));
    }

    #[test]
    fn explicit_path_wins() {
        let home = tempfile::tempdir().unwrap();
        user_config(home.path());
        let explicit = home.path().join("elsewhere.toml");
        assert_eq!(search(Some(&explicit), Some(home.path()), false), explicit);
        assert_eq!(search(Some(&explicit), None, true), explicit);
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, b"foo = 'bar'").unwrap();

        assert_eq!(read_config_from(&path).unwrap(), b"foo = 'bar'");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound)));

        // a directory is not a config file either
        assert!(matches!(read_config_from(dir.path()), Err(ConfigError::ConfigNotFound)));
    }
}
