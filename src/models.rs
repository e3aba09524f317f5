// src/models.rs
use std::fmt;
use std::str::FromStr;

// Random password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_punctuation: bool,
    pub exclude_chars: String,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_punctuation: true,
            exclude_chars: String::new(),
        }
    }
}

/// Text transform applied to each word of a memorable password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCase {
    /// Words are kept exactly as read from the list.
    #[default]
    Lower,
    Upper,
    Capitalize,
}

impl WordCase {
    /// Parses user input, falling back to `Lower` for anything unrecognised.
    /// Returns whether the fallback was taken.
    pub fn from_input(input: &str) -> (Self, bool) {
        match input.parse() {
            Ok(case) => (case, false),
            Err(_) => (WordCase::Lower, true),
        }
    }
}

impl FromStr for WordCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" => Ok(WordCase::Lower),
            "upper" => Ok(WordCase::Upper),
            "capitalize" => Ok(WordCase::Capitalize),
            other => Err(format!("unknown word case '{}'", other)),
        }
    }
}

impl fmt::Display for WordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCase::Lower => write!(f, "lower"),
            WordCase::Upper => write!(f, "upper"),
            WordCase::Capitalize => write!(f, "capitalize"),
        }
    }
}

/// Which generator produced a password. The label doubles as the log directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Random,
    Memorable,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Random => "Random",
            Category::Memorable => "Memorable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Category::Random),
            "memorable" => Ok(Category::Memorable),
            other => Err(format!("unknown password type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub value: String,
    pub category: Category,
}

impl GeneratedPassword {
    pub fn new(value: String, category: Category) -> Self {
        Self { value, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_case_parses_known_values() {
        assert_eq!("upper".parse::<WordCase>(), Ok(WordCase::Upper));
        assert_eq!(" Capitalize ".parse::<WordCase>(), Ok(WordCase::Capitalize));
        assert_eq!("LOWER".parse::<WordCase>(), Ok(WordCase::Lower));
    }

    #[test]
    fn word_case_falls_back_to_lower() {
        assert_eq!(WordCase::from_input("title"), (WordCase::Lower, true));
        assert_eq!(WordCase::from_input(""), (WordCase::Lower, true));
        assert_eq!(WordCase::from_input("upper"), (WordCase::Upper, false));
    }

    #[test]
    fn category_labels_are_directory_names() {
        assert_eq!(Category::Random.label(), "Random");
        assert_eq!(Category::Memorable.to_string(), "Memorable");
        assert_eq!("MEMORABLE".parse::<Category>(), Ok(Category::Memorable));
        assert!("vault".parse::<Category>().is_err());
    }
}
