use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_yaml::Value;

use crate::utils::{IdCardError, Result};

pub const CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_SALARY: u32 = 4050;

/// Settings read from `config.yml` next to the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub salary: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            salary: DEFAULT_SALARY,
        }
    }
}

impl AppConfig {
    /// Load the config, falling back to defaults for anything missing or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> AppConfig {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read {}: {}; using defaults", path.display(), e);
                return AppConfig::default();
            }
        };

        let config = AppConfig {
            salary: Self::parse_salary(&text).unwrap_or(DEFAULT_SALARY),
        };
        info!("Loaded config from {}: {:?}", path.display(), config);
        config
    }

    /// Like [`AppConfig::load`], but writes a default file first when none exists.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(IdCardError::Config(format!("{} is a directory", path.display())));
        }
        if !path.exists() {
            let config = AppConfig::default();
            fs::write(path, config.to_yaml())?;
            info!("Initialised {} with defaults", path.display());
            return Ok(config);
        }
        Ok(Self::load(path))
    }

    pub fn to_yaml(&self) -> String {
        format!("salary: {}\n", self.salary)
    }

    fn parse_salary(text: &str) -> Option<u32> {
        let doc: Value = match serde_yaml::from_str(text) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Malformed config: {}", e);
                return None;
            }
        };

        match doc.get("salary")? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            // Quoted values are accepted as long as the content is an integer
            Value::String(s) => s
                .trim()
                .trim_matches(|c| c == '\'' || c == '"')
                .parse()
                .ok(),
            other => {
                warn!("Ignoring non-numeric salary {:?}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_salary() {
        let file = config_file("salary: 4800\n");
        assert_eq!(AppConfig::load(file.path()).salary, 4800);
    }

    #[test]
    fn test_load_quoted_salary() {
        let file = config_file("salary: \"5100\"\n");
        assert_eq!(AppConfig::load(file.path()).salary, 5100);
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let malformed = config_file("salary: [1, 2\n");
        assert_eq!(AppConfig::load(malformed.path()).salary, DEFAULT_SALARY);

        let not_a_number = config_file("salary: lots\n");
        assert_eq!(AppConfig::load(not_a_number.path()).salary, DEFAULT_SALARY);

        let missing_key = config_file("currency: RON\n");
        assert_eq!(AppConfig::load(missing_key.path()).salary, DEFAULT_SALARY);

        assert_eq!(AppConfig::load("/nonexistent/config.yml"), AppConfig::default());
    }

    #[test]
    fn test_load_or_init_writes_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(config.salary, DEFAULT_SALARY);
        assert_eq!(fs::read_to_string(&path).unwrap(), "salary: 4050\n");

        fs::write(&path, "salary: 4200\n").unwrap();
        assert_eq!(AppConfig::load_or_init(&path).unwrap().salary, 4200);
    }

    #[test]
    fn test_load_or_init_rejects_directory() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load_or_init(dir.path()).unwrap_err();
        assert!(matches!(err, IdCardError::Config(_)));
    }
}
