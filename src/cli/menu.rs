// src/cli/menu.rs
use inquire::Text;
use rand::Rng;

use crate::cli::handlers;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{Category, GeneratedPassword, RandomOptions, WordCase};
use crate::storage::PasswordStore;

/// Source of answers for the interactive session.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> anyhow::Result<String>;
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> anyhow::Result<String> {
        Ok(Text::new(message).prompt()?)
    }
}

#[derive(Debug)]
pub enum SessionOutcome {
    /// Generated and saved.
    Saved(GeneratedPassword),
    /// Generated, but writing the log failed.
    Unsaved(GeneratedPassword, String),
    /// Generation failed; nothing was written.
    Failed(String),
    InvalidMode,
}

/// Parses a count typed by the user. Anything that is not a non-negative
/// integer yields `default`; the flag reports whether that happened.
pub fn parse_count(input: &str, default: usize) -> (usize, bool) {
    match input.trim().parse() {
        Ok(count) => (count, false),
        Err(_) => (default, true),
    }
}

/// Only a literal "yes" counts as yes.
pub fn parse_yes(input: &str) -> bool {
    input.trim().to_lowercase() == "yes"
}

pub fn run_cli_menu(config: &Config, store: &PasswordStore) -> anyhow::Result<()> {
    let mut generator = PasswordGenerator::new();
    run_session(&mut InquirePrompter, &mut generator, config, store)?;
    Ok(())
}

pub fn run_session<P: Prompter, R: Rng>(
    prompter: &mut P,
    generator: &mut PasswordGenerator<R>,
    config: &Config,
    store: &PasswordStore,
) -> anyhow::Result<SessionOutcome> {
    println!("Password Generator");

    let mode = prompter.ask("Choose password type (memorable/random):")?;

    let generated = match mode.parse::<Category>() {
        Ok(Category::Memorable) => {
            let input = prompter.ask("Enter the number of words (e.g., 3):")?;
            let (num_words, fell_back) = parse_count(&input, config.default_num_words);
            if fell_back {
                println!("Invalid input. Using default of {} words.", num_words);
            }

            let input = prompter.ask("Choose word case (lower/upper/capitalize):")?;
            let (case, fell_back) = WordCase::from_input(&input);
            if fell_back {
                println!("Invalid case input. Using default '{}'.", case);
            }

            handlers::resolve_word_list(config).and_then(|word_list| {
                handlers::handle_memorable(generator, None, num_words, case, &word_list)
            })
        }
        Ok(Category::Random) => {
            let input = prompter.ask("Enter the password length (e.g., 12):")?;
            let (length, fell_back) = parse_count(&input, config.default_password_length);
            if fell_back {
                println!("Invalid input. Using default length of {}.", length);
            }

            let include_lowercase = parse_yes(&prompter.ask("Include lowercase letters? (yes/no):")?);
            let include_uppercase = parse_yes(&prompter.ask("Include uppercase letters? (yes/no):")?);
            let include_numbers = parse_yes(&prompter.ask("Include numbers? (yes/no):")?);
            let include_punctuation =
                parse_yes(&prompter.ask("Include punctuation symbols? (yes/no):")?);
            let exclude_chars = prompter
                .ask("Enter characters to exclude (leave blank for none):")?
                .trim()
                .to_string();

            let options = RandomOptions {
                length,
                include_lowercase,
                include_uppercase,
                include_numbers,
                include_punctuation,
                exclude_chars,
            };

            handlers::handle_random(generator, None, &options)
        }
        Err(_) => {
            println!("Invalid password type. Please choose either 'memorable' or 'random'.");
            return Ok(SessionOutcome::InvalidMode);
        }
    };

    let password = match generated {
        Ok(password) => password,
        Err(e) => {
            log::error!("Password generation failed: {}", e);
            println!("Error: {}", e);
            return Ok(SessionOutcome::Failed(e.to_string()));
        }
    };

    println!("Generated {} Password: {}", password.category, password.value);

    match handlers::persist(store, &password) {
        Ok(()) => Ok(SessionOutcome::Saved(password)),
        Err(e) => {
            println!("Error: failed to save password: {}", e);
            Ok(SessionOutcome::Unsaved(password, e.to_string()))
        }
    }
}
