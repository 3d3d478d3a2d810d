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

use std::fmt;
use std::str::FromStr;
use rand::Rng;
use super::dice;

pub const BOARD_SIZE: usize = 5;
pub const N_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The letters of one game in row-major order. The letters are
/// always stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: [char; N_CELLS],
}

#[derive(Debug)]
pub enum ParseError {
    UnexpectedCharacter(usize, char),
    LineTooLong(usize),
    LineTooShort(usize),
    NotEnoughLines,
    TooManyLines,
}

impl Board {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let rolls = dice::roll(rng);

        Board {
            letters: std::array::from_fn(|pos| rolls[pos].letter),
        }
    }

    pub fn letter(&self, vertex: usize) -> char {
        self.letters[vertex]
    }

    pub fn letters(&self) -> &[char; N_CELLS] {
        &self.letters
    }

    fn set_row(&mut self, line_num: usize, line: &str) -> Result<(), ParseError> {
        let mut col = 0;

        for ch in line.chars() {
            if col >= BOARD_SIZE {
                return Err(ParseError::LineTooLong(line_num));
            }

            let mut lowercase = ch.to_lowercase();

            let Some(letter) = lowercase.next()
                .filter(|l| l.is_alphabetic())
            else {
                return Err(ParseError::UnexpectedCharacter(line_num, ch));
            };

            if lowercase.next().is_some() {
                return Err(ParseError::UnexpectedCharacter(line_num, ch));
            }

            self.letters[line_num * BOARD_SIZE + col] = letter;

            col += 1;
        }

        if col < BOARD_SIZE {
            Err(ParseError::LineTooShort(line_num))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, letters) in self.letters.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }

            for letter in letters {
                write!(f, "{}", letter.to_uppercase())?;
            }
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let mut board = Board { letters: ['a'; N_CELLS] };

        let mut line_num = 0;

        for line in s.lines() {
            if line_num >= BOARD_SIZE {
                return Err(ParseError::TooManyLines);
            }

            board.set_row(line_num, line)?;

            line_num += 1;
        }

        if line_num >= BOARD_SIZE {
            Ok(board)
        } else {
            Err(ParseError::NotEnoughLines)
        }
    }
}

fn format_character(ch: char, f: &mut fmt::Formatter) -> fmt::Result {
    if ch.is_control() {
        write!(f, "U+{:04x}", ch as u32)
    } else {
        write!(f, "{}", ch)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedCharacter(line_num, ch) => {
                write!(f, "line {}: unexpected character: ", line_num + 1)?;
                format_character(*ch, f)
            },
            ParseError::LineTooLong(line_num) => {
                write!(f, "line {}: line too long", line_num + 1)
            },
            ParseError::LineTooShort(line_num) => {
                write!(f, "line {}: line too short", line_num + 1)
            },
            ParseError::NotEnoughLines => write!(f, "not enough lines"),
            ParseError::TooManyLines => write!(f, "too many lines"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse() {
        let board_source = "ABCDE\n\
                            fghij\n\
                            KlMnO\n\
                            PQRST\n\
                            UVWXY";

        let board = board_source.parse::<Board>().unwrap();

        assert_eq!(
            &board.to_string(),
            "ABCDE\n\
             FGHIJ\n\
             KLMNO\n\
             PQRST\n\
             UVWXY",
        );

        for vertex in 0..N_CELLS {
            assert_eq!(
                board.letter(vertex),
                char::from_u32('a' as u32 + vertex as u32).unwrap(),
            );
        }
    }

    #[test]
    fn bad_character() {
        assert_eq!(
            "line 2: unexpected character: -",
            &"ABCDE\nAB-DE".parse::<Board>().unwrap_err().to_string(),
        );
        assert_eq!(
            "line 1: unexpected character: U+0009",
            &"ABCD\t".parse::<Board>().unwrap_err().to_string(),
        );
        assert_eq!(
            "line 1: unexpected character: İ",
            &"ABCDİ".parse::<Board>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn line_too_long() {
        assert_eq!(
            "line 1: line too long",
            &"ABCDEF".parse::<Board>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn line_too_short() {
        assert_eq!(
            "line 3: line too short",
            &"ABCDE\nABCDE\nABCD".parse::<Board>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn too_many_lines() {
        assert_eq!(
            "too many lines",
            &"ABCDE\n\
              FGHIJ\n\
              KLMNO\n\
              PQRST\n\
              UVWXY\n\
              ZZZZZ"
                .parse::<Board>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn not_enough_lines() {
        assert_eq!(
            "not enough lines",
            &"ABCDE\n\
              FGHIJ\n\
              KLMNO\n\
              PQRST"
                .parse::<Board>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn generate() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::generate(&mut rng);

        assert_eq!(board.letters().len(), N_CELLS);
        assert!(board.letters().iter().all(|l| l.is_ascii_lowercase()));

        // The board survives a round trip through its text form
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }
}
