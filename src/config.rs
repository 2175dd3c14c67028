use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "grades.csv";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub loader: LoaderConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// CSV file to read.
    pub file: PathBuf,
    /// Fail instead of printing nothing when the file cannot be opened.
    pub strict: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            strict: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Echo the header column names before the records.
    pub headers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { headers: true }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot read configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.loader.file, PathBuf::from("grades.csv"));
        assert!(!config.loader.strict);
        assert!(config.display.headers);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.loader.file, PathBuf::from(DEFAULT_FILE));
        assert!(config.display.headers);
    }

    #[test]
    fn partial_sections() {
        let config = Config::parse(
            r#"
            [loader]
            strict = true

            [display]
            headers = false
            "#,
        )
        .unwrap();
        assert_eq!(config.loader.file, PathBuf::from(DEFAULT_FILE));
        assert!(config.loader.strict);
        assert!(!config.display.headers);
    }

    #[test]
    fn custom_file() {
        let config = Config::parse("[loader]\nfile = \"data/class.csv\"\n").unwrap();
        assert_eq!(config.loader.file, PathBuf::from("data/class.csv"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Config::parse("[loader]\ndelimiter = \";\"\n").is_err());
    }

    #[test]
    fn missing_config_file() {
        let path = std::env::temp_dir().join("grades-no-such-config.toml");
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("cannot read configuration file"));
    }
}
