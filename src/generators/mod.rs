// src/generators/mod.rs
use std::path::Path;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::Result;
use crate::models::{Category, GeneratedPassword, RandomOptions, WordCase};

pub mod memorable;
pub mod random;

pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_random(&mut self, options: &RandomOptions) -> Result<GeneratedPassword> {
        let value = random::generate(options, &mut self.rng)?;
        Ok(GeneratedPassword::new(value, Category::Random))
    }

    pub fn generate_memorable(
        &mut self,
        num_words: usize,
        case: WordCase,
        word_list: &Path,
    ) -> Result<GeneratedPassword> {
        let value = memorable::generate(num_words, case, word_list, &mut self.rng)?;
        Ok(GeneratedPassword::new(value, Category::Memorable))
    }
}
