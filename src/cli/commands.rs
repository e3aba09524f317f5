// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::{Category, RandomOptions, WordCase};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password from character classes
    Random(RandomArgs),

    /// Generate a memorable password from dictionary words
    Memorable {
        /// Number of words (defaults to DEFAULT_NUM_WORDS or 3)
        #[arg(long, short)]
        words: Option<usize>,

        /// Word case: lower, upper or capitalize
        #[arg(long, short, default_value = "lower")]
        case: WordCase,

        /// Print the password without logging it
        #[arg(long)]
        no_save: bool,
    },

    /// Show passwords saved for a category
    History {
        /// random or memorable
        #[arg(required = true)]
        category: Category,

        /// Only show the most recent N entries
        #[arg(long, short)]
        limit: Option<usize>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct RandomArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 12)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out punctuation symbols
    #[arg(long)]
    pub no_punctuation: bool,

    /// Characters that must never appear
    #[arg(long, short, default_value = "")]
    pub exclude: String,

    /// Print the password without logging it
    #[arg(long)]
    pub no_save: bool,
}

impl RandomArgs {
    /// Uses `default_length` when no length was given.
    pub fn options(&self, default_length: usize) -> RandomOptions {
        RandomOptions {
            length: self.length.unwrap_or(default_length),
            include_lowercase: !self.no_lowercase,
            include_uppercase: !self.no_uppercase,
            include_numbers: !self.no_numbers,
            include_punctuation: !self.no_punctuation,
            exclude_chars: self.exclude.clone(),
        }
    }
}
