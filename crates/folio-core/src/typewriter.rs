//! Hero typewriter effect.
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. Each [`Typewriter::step`] returns the text to show
//! and how long to wait before the next step.

use crate::config::TypewriterConfig;
use crate::error::{FolioError, Result};

/// Output of one typewriter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    /// Text to display.
    pub text: String,
    /// Wait before the next step.
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
/// Typewriter state machine over a phrase list.
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    timing: TypewriterConfig,
}

impl Typewriter {
    /// Empty phrases are dropped; at least one non-empty phrase is required.
    pub fn new(config: &TypewriterConfig) -> Result<Self> {
        let phrases: Vec<Vec<char>> = config
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();
        if phrases.is_empty() {
            return Err(FolioError::NoPhrases);
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            timing: config.clone(),
        })
    }

    /// Delay before the very first step.
    pub fn start_delay_ms(&self) -> u32 {
        self.timing.start_delay_ms
    }

    /// Index of the phrase being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Whether the current phrase is being deleted.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one character and report what to show.
    pub fn step(&mut self) -> TypeStep {
        let phrase = &self.phrases[self.phrase_index];
        let mut delay = if self.deleting {
            self.char_index -= 1;
            self.timing.delete_delay_ms
        } else {
            self.char_index += 1;
            self.timing.type_delay_ms
        };
        let text: String = phrase[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == phrase.len() {
            delay = self.timing.hold_delay_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            delay = self.timing.next_phrase_delay_ms;
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }

        TypeStep {
            text,
            next_delay_ms: delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        let config = TypewriterConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..TypewriterConfig::default()
        };
        Typewriter::new(&config).expect("has phrases")
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = typewriter(&["ab", "x"]);
        let steps: Vec<_> = (0..7).map(|_| tw.step()).collect();
        let summary: Vec<_> = steps
            .iter()
            .map(|s| (s.text.as_str(), s.next_delay_ms))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("a", 80),
                ("ab", 2000),
                ("a", 40),
                ("", 400),
                ("x", 2000),
                ("", 400),
                ("a", 80),
            ]
        );
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = typewriter(&["héé"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
        let full = tw.step();
        assert_eq!(full.text, "héé");
        assert_eq!(full.next_delay_ms, 2000);
        assert!(tw.is_deleting());
    }

    #[test]
    fn skips_empty_phrases() {
        let mut tw = typewriter(&["", "z", ""]);
        assert_eq!(tw.step().text, "z");
        assert_eq!(tw.step().text, "");
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn no_phrases_is_an_error() {
        let config = TypewriterConfig {
            phrases: vec![String::new()],
            ..TypewriterConfig::default()
        };
        assert_eq!(Typewriter::new(&config).unwrap_err(), FolioError::NoPhrases);
    }

    #[test]
    fn default_start_delay() {
        assert_eq!(typewriter(&["a"]).start_delay_ms(), 1000);
    }
}
