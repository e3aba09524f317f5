// src/generators/memorable.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PassforgeError, Result};
use crate::models::WordCase;

/// Reads a newline-delimited word list. Each line is trimmed; blank lines are kept.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| PassforgeError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();
    log::debug!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

pub fn apply_case(word: &str, case: WordCase) -> String {
    match case {
        WordCase::Lower => word.to_string(),
        WordCase::Upper => word.to_uppercase(),
        WordCase::Capitalize => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
    }
}

/// Picks `num_words` distinct words, applies `case`, suffixes each with a digit
/// and joins them with hyphens.
pub fn generate_from_words<R: Rng + ?Sized>(
    words: &[String],
    num_words: usize,
    case: WordCase,
    rng: &mut R,
) -> Result<String> {
    // First occurrence wins, so candidates keep file order.
    let mut seen = HashSet::with_capacity(words.len());
    let candidates: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| seen.insert(*word))
        .collect();

    if num_words > candidates.len() {
        return Err(PassforgeError::SamplingError {
            requested: num_words,
            available: candidates.len(),
        });
    }

    let tokens: Vec<String> = candidates
        .choose_multiple(&mut *rng, num_words)
        .map(|word| format!("{}{}", apply_case(word, case), rng.gen_range(0..=9)))
        .collect();

    Ok(tokens.join("-"))
}

pub fn generate<R: Rng + ?Sized>(
    num_words: usize,
    case: WordCase,
    word_list: &Path,
    rng: &mut R,
) -> Result<String> {
    let words = load_word_list(word_list)?;
    generate_from_words(&words, num_words, case, rng)
}
