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

use serde::Serialize;
use super::dictionary::Dictionary;

// Points for words of length 0 to 7. Anything longer gets
// LONG_WORD_POINTS.
static POINT_SCALE: [u32; 8] = [0, 0, 0, 1, 1, 2, 3, 5];
const LONG_WORD_POINTS: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub word: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No letters were selected
    Empty,
    /// The dictionary hasn’t finished loading yet
    NotReady,
    /// The word isn’t in the dictionary
    InvalidWord(String),
    Accepted(WordRecord),
}

/// The accepted words in the order they were submitted along with
/// the sum of their points
#[derive(Debug, Clone, Default, Serialize)]
pub struct Score {
    history: Vec<WordRecord>,
    total: u32,
}

pub fn points_for_length(length: usize) -> u32 {
    POINT_SCALE.get(length).copied().unwrap_or(LONG_WORD_POINTS)
}

impl Score {
    pub fn new() -> Score {
        Score::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn history(&self) -> &[WordRecord] {
        &self.history
    }

    /// Scores the word if it is in the dictionary. The same word can
    /// be scored more than once.
    pub fn submit(
        &mut self,
        word: &str,
        dictionary: &Dictionary,
    ) -> SubmitOutcome {
        if word.is_empty() {
            SubmitOutcome::Empty
        } else if dictionary.contains(word.chars()) {
            SubmitOutcome::Accepted(self.record(word))
        } else {
            SubmitOutcome::InvalidWord(word.to_string())
        }
    }

    fn record(&mut self, word: &str) -> WordRecord {
        let record = WordRecord {
            word: word.to_string(),
            points: points_for_length(word.chars().count()),
        };

        self.total += record.points;
        self.history.push(record.clone());

        record
    }
}
