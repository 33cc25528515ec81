use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the settings file, looked up in the working directory unless a path is given.
pub const FILE_NAME: &str = "estatetrust.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Api {
    /// The versioned API root, e.g. `https://estatetrust.example/api/v1`.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Storage {
    /// JSON file holding the persisted session.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Log {
    /// Filter directives used when `RUST_LOG` is not set.
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub storage: Storage,
    pub log: Log,
}

impl Settings {
    /// Loads the settings: defaults, then the settings file, then `ESTATETRUST_*` variables.
    pub fn new(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name(FILE_NAME)
                .format(FileFormat::Toml)
                .required(false),
        };
        let config = Config::builder()
            .set_default("api.base_url", "http://localhost:8000/api/v1")?
            .set_default(
                "storage.path",
                default_storage_path().to_string_lossy().into_owned(),
            )?
            .set_default("log.filter", "estatetrust=info")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("ESTATETRUST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("estatetrust")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(Some(&write(&dir, ""))).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8000/api/v1");
        assert!(settings.storage.path.ends_with("session.json"));
        assert_eq!(settings.log.filter, "estatetrust=info");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "[api]\nbase_url = \"https://estatetrust.example/api/v1\"\n\n[storage]\npath = \"/tmp/et.json\"\n",
        );
        let settings = Settings::new(Some(&path)).unwrap();
        assert_eq!(settings.api.base_url, "https://estatetrust.example/api/v1");
        assert_eq!(settings.storage.path, PathBuf::from("/tmp/et.json"));
        assert_eq!(settings.log.filter, "estatetrust=info");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::new(Some(&dir.path().join("absent.toml"))).is_err());
    }

    fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }
}
