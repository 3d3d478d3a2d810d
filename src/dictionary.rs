// Boggle – A word-finding board game
// Copyright (C) 2026  Boggle contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Set of valid words. The words are stored in lowercase and lookups
/// ignore case.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    InvalidUtf8,
}

impl Dictionary {
    /// Parses a word list with one word per line
    pub fn new(word_list: &str) -> Dictionary {
        let words = word_list
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();

        Dictionary { words }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Dictionary, LoadError> {
        match std::str::from_utf8(data) {
            Ok(word_list) => Ok(Dictionary::new(word_list)),
            Err(_) => Err(LoadError::InvalidUtf8),
        }
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Dictionary, LoadError> {
        let data = std::fs::read(filename)?;

        Dictionary::from_bytes(&data)
    }

    pub fn contains<I: Iterator<Item = char>>(&self, word: I) -> bool {
        let word = word.flat_map(|c| c.to_lowercase()).collect::<String>();

        self.words.contains(&word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::InvalidUtf8 => {
                write!(f, "the word list contains invalid UTF-8")
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_test_dictionary() -> Dictionary {
        Dictionary::new("cat\nDOG\r\n\n  apple  \nĉapelo\n")
    }

    #[test]
    fn contains() {
        let dictionary = make_test_dictionary();

        assert_eq!(dictionary.len(), 4);

        assert!(dictionary.contains("cat".chars()));
        assert!(dictionary.contains("dog".chars()));
        assert!(dictionary.contains("apple".chars()));
        assert!(dictionary.contains("ĉapelo".chars()));

        assert!(!dictionary.contains("".chars()));
        assert!(!dictionary.contains("ca".chars()));
        assert!(!dictionary.contains("cats".chars()));
        assert!(!dictionary.contains("appl".chars()));
        assert!(!dictionary.contains(" apple".chars()));

        assert!(dictionary.contains("CAT".chars()));
        assert!(dictionary.contains("Dog".chars()));
        assert!(dictionary.contains("ĈAPelo".chars()));
    }

    #[test]
    fn empty() {
        let dictionary = Dictionary::default();

        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("cat".chars()));

        assert!(Dictionary::new("\n\n").is_empty());
    }

    #[test]
    fn from_bytes() {
        let dictionary = Dictionary::from_bytes(b"zebra\nyak").unwrap();
        assert!(dictionary.contains("YAK".chars()));

        assert_eq!(
            &Dictionary::from_bytes(b"ok\n\xff\xfe").unwrap_err().to_string(),
            "the word list contains invalid UTF-8",
        );
    }

    #[test]
    fn load_missing_file() {
        let error = Dictionary::load("/this/file/does/not/exist.txt")
            .unwrap_err();

        assert!(matches!(
            error,
            LoadError::Io(ref e) if e.kind() == io::ErrorKind::NotFound,
        ));
    }
}
