// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::core::config::Config;
use crate::error::{PassforgeError, Result};
use crate::generators::PasswordGenerator;
use crate::models::{Category, GeneratedPassword, RandomOptions, WordCase};
use crate::storage::{LogEntry, PasswordStore};

// Handlers shared by the interactive menu and the subcommands.
// A password is only persisted once generation has succeeded.

pub fn resolve_word_list(config: &Config) -> Result<PathBuf> {
    config
        .word_list_file
        .clone()
        .ok_or(PassforgeError::MissingWordList)
}

pub fn persist(store: &PasswordStore, password: &GeneratedPassword) -> Result<()> {
    store.save(&password.value, password.category.label())
}

pub fn handle_random<R: Rng>(
    generator: &mut PasswordGenerator<R>,
    store: Option<&PasswordStore>,
    options: &RandomOptions,
) -> Result<GeneratedPassword> {
    let password = generator.generate_random(options)?;
    if let Some(store) = store {
        persist(store, &password)?;
    }
    Ok(password)
}

pub fn handle_memorable<R: Rng>(
    generator: &mut PasswordGenerator<R>,
    store: Option<&PasswordStore>,
    num_words: usize,
    case: WordCase,
    word_list: &Path,
) -> Result<GeneratedPassword> {
    let password = generator.generate_memorable(num_words, case, word_list)?;
    if let Some(store) = store {
        persist(store, &password)?;
    }
    Ok(password)
}

pub fn handle_history(
    store: &PasswordStore,
    category: Category,
    limit: Option<usize>,
) -> Result<Vec<LogEntry>> {
    let mut entries = store.entries(category.label())?;
    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    fn seeded() -> PasswordGenerator<StdRng> {
        PasswordGenerator::with_rng(StdRng::seed_from_u64(2024))
    }

    #[test]
    fn word_list_comes_from_config() {
        let config = Config {
            word_list_file: Some(PathBuf::from("/from/env.txt")),
            ..Config::default()
        };
        let resolved = resolve_word_list(&config).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/env.txt"));
    }

    #[test]
    fn missing_word_list_configuration() {
        assert!(matches!(
            resolve_word_list(&Config::default()),
            Err(PassforgeError::MissingWordList)
        ));
    }

    #[test]
    fn random_password_is_saved_under_random() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::new(dir.path());
        let mut generator = seeded();

        let password = handle_random(&mut generator, Some(&store), &RandomOptions::default()).unwrap();
        assert_eq!(password.category, Category::Random);
        assert_eq!(password.value.chars().count(), 12);

        let last = store.last_entry("Random").unwrap().unwrap();
        assert_eq!(last.password, password.value);
    }

    #[test]
    fn failed_generation_saves_nothing() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::new(dir.path());
        let mut generator = seeded();

        let options = RandomOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_punctuation: false,
            ..RandomOptions::default()
        };
        assert!(handle_random(&mut generator, Some(&store), &options).is_err());
        assert!(!dir.path().join("Random").exists());

        let missing = dir.path().join("nope.txt");
        assert!(handle_memorable(&mut generator, Some(&store), 3, WordCase::Lower, &missing).is_err());
        assert!(!dir.path().join("Memorable").exists());
    }

    #[test]
    fn memorable_password_is_saved_under_memorable() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("words.txt");
        fs::write(&words, "harbor\nlantern\nmeadow\nwillow\n").unwrap();
        let store = PasswordStore::new(dir.path());
        let mut generator = seeded();

        let password =
            handle_memorable(&mut generator, Some(&store), 3, WordCase::Upper, &words).unwrap();
        assert_eq!(password.category, Category::Memorable);
        assert_eq!(password.value.split('-').count(), 3);

        let last = store.last_entry("Memorable").unwrap().unwrap();
        assert_eq!(last.password, password.value);
    }

    #[test]
    fn history_keeps_most_recent_entries() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::new(dir.path());
        for password in ["one", "two", "three"] {
            store.save(password, "Random").unwrap();
        }

        let all = handle_history(&store, Category::Random, None).unwrap();
        assert_eq!(all.len(), 3);

        let recent: Vec<String> = handle_history(&store, Category::Random, Some(2))
            .unwrap()
            .into_iter()
            .map(|entry| entry.password)
            .collect();
        assert_eq!(recent, vec!["two", "three"]);

        assert_eq!(handle_history(&store, Category::Random, Some(10)).unwrap().len(), 3);
    }
}
