// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Memorable passwords
    pub word_list_file: Option<PathBuf>,
    pub default_num_words: usize,

    // Random passwords
    pub default_password_length: usize,

    // Storage
    pub store_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list_file: None,
            default_num_words: 3,

            default_password_length: 12,

            store_directory: PathBuf::from("."),

            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("PASSFORGE_WORD_LIST") {
            if !path.trim().is_empty() {
                config.word_list_file = Some(PathBuf::from(path));
            }
        }

        if let Some(val) = lookup("DEFAULT_NUM_WORDS") {
            if let Ok(words) = val.parse() {
                config.default_num_words = words;
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Some(dir) = lookup("PASSFORGE_STORE_DIR") {
            config.store_directory = PathBuf::from(dir);
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(mut self, word_list: Option<PathBuf>, store_directory: Option<PathBuf>) -> Self {
        if let Some(path) = word_list {
            self.word_list_file = Some(path);
        }
        if let Some(dir) = store_directory {
            self.store_directory = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_interactive_fallbacks() {
        let config = config_from(&[]);
        assert_eq!(config.default_num_words, 3);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.store_directory, PathBuf::from("."));
        assert!(config.word_list_file.is_none());
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("PASSFORGE_WORD_LIST", "/usr/share/dict/words"),
            ("DEFAULT_NUM_WORDS", "5"),
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("PASSFORGE_STORE_DIR", "/tmp/passwords"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.word_list_file, Some(PathBuf::from("/usr/share/dict/words")));
        assert_eq!(config.default_num_words, 5);
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.store_directory, PathBuf::from("/tmp/passwords"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn flags_override_environment() {
        let config = config_from(&[
            ("PASSFORGE_WORD_LIST", "/env/words.txt"),
            ("PASSFORGE_STORE_DIR", "/env/store"),
        ]);

        let untouched = config.clone().with_overrides(None, None);
        assert_eq!(untouched.word_list_file, Some(PathBuf::from("/env/words.txt")));
        assert_eq!(untouched.store_directory, PathBuf::from("/env/store"));

        let flagged = config.with_overrides(
            Some(PathBuf::from("/flag/words.txt")),
            Some(PathBuf::from("/flag/store")),
        );
        assert_eq!(flagged.word_list_file, Some(PathBuf::from("/flag/words.txt")));
        assert_eq!(flagged.store_directory, PathBuf::from("/flag/store"));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = config_from(&[
            ("PASSFORGE_WORD_LIST", "  "),
            ("DEFAULT_NUM_WORDS", "three"),
            ("DEFAULT_PASSWORD_LENGTH", "-4"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert!(config.word_list_file.is_none());
        assert_eq!(config.default_num_words, 3);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
