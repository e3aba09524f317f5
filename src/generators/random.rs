// src/generators/random.rs
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PassforgeError, Result};
use crate::models::RandomOptions;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Assembles the enabled character classes, then drops every excluded character.
pub fn character_pool(options: &RandomOptions) -> Vec<char> {
    let mut pool = String::new();

    if options.include_lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.include_numbers {
        pool.push_str(DIGITS);
    }
    if options.include_punctuation {
        pool.push_str(PUNCTUATION);
    }

    pool.chars()
        .filter(|c| !options.exclude_chars.contains(*c))
        .collect()
}

/// Draws `options.length` characters from the pool, with replacement.
pub fn generate<R: Rng + ?Sized>(options: &RandomOptions, rng: &mut R) -> Result<String> {
    let pool = character_pool(options);

    if pool.is_empty() {
        return Err(PassforgeError::InvalidConfiguration(
            "no characters available to generate the password, check your options".to_string(),
        ));
    }

    log::debug!(
        "Sampling {} characters from a pool of {}",
        options.length,
        pool.len()
    );

    let password = (0..options.length)
        .filter_map(|_| pool.choose(&mut *rng).copied())
        .collect();

    Ok(password)
}
