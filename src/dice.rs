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

use rand::Rng;

pub const N_DICE: usize = 25;
pub const FACES_PER_DIE: usize = 6;

// The faces of each die of the 5×5 “Big Boggle” set
pub static DICE: [&[u8; FACES_PER_DIE]; N_DICE] = [
    b"aaafrs", b"aaeeee", b"aafirs", b"adennn", b"aeeeem",
    b"aeegmu", b"aegmnn", b"afirsy", b"bjkqxz", b"ccenst",
    b"ceiilt", b"ceilpt", b"ceipst", b"ddhnot", b"dhhlor",
    b"dhlnor", b"dhlnor", b"eiiitt", b"emottt", b"ensssu",
    b"fiprsy", b"gorrvw", b"iprrry", b"nootuw", b"ooottu",
];

/// The face that came up for one die, remembering which die it
/// came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll {
    pub die: usize,
    pub letter: char,
}

pub fn faces(die: usize) -> impl Iterator<Item = char> {
    DICE[die].iter().map(|&b| b as char)
}

fn roll_die<R: Rng + ?Sized>(die: usize, rng: &mut R) -> Roll {
    Roll {
        die,
        letter: DICE[die][rng.gen_range(0..FACES_PER_DIE)] as char,
    }
}

/// Fisher–Yates shuffle. Each position from the end is swapped with
/// a position chosen from the inclusive range up to itself.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Rolls every die once and then shuffles the results so that the
/// order of the catalog doesn’t leak into the board positions.
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> [Roll; N_DICE] {
    let mut rolls = std::array::from_fn(|die| roll_die(die, rng));

    shuffle(&mut rolls, rng);

    rolls
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_letter_is_a_face_of_its_die() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rolls = roll(&mut rng);

            assert_eq!(rolls.len(), N_DICE);

            for roll in rolls.iter() {
                assert!(
                    faces(roll.die).any(|face| face == roll.letter),
                    "{} is not a face of die {}",
                    roll.letter,
                    roll.die,
                );
            }
        }
    }

    #[test]
    fn every_die_is_used_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let rolls = roll(&mut rng);
        let mut used = 0u32;

        for roll in rolls.iter() {
            assert_eq!(used & (1 << roll.die), 0);
            used |= 1 << roll.die;
        }

        assert_eq!(used, (1 << N_DICE) - 1);
    }

    #[test]
    fn all_faces_can_come_up() {
        let mut rng = StdRng::seed_from_u64(7);
        // The first die has the faces a, f, r and s
        let mut seen = [false; 26];

        for _ in 0..500 {
            let letter = roll_die(0, &mut rng).letter;
            seen[(letter as u8 - b'a') as usize] = true;
        }

        assert!(seen[(b'a' - b'a') as usize]);
        assert!(seen[(b'f' - b'a') as usize]);
        assert!(seen[(b'r' - b'a') as usize]);
        assert!(seen[(b's' - b'a') as usize]);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut first_seen = [false; N_DICE];
        let mut last_seen = [false; N_DICE];

        for _ in 0..5000 {
            let mut items: [usize; N_DICE] = std::array::from_fn(|i| i);
            shuffle(&mut items, &mut rng);
            first_seen[items[0]] = true;
            last_seen[items[N_DICE - 1]] = true;
        }

        assert!(first_seen.iter().all(|&s| s));
        // An item can stay where it is
        assert!(last_seen.iter().all(|&s| s));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut items = [3, 1, 4, 1, 5, 9, 2, 6];

        shuffle(&mut items, &mut rng);

        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [1, 1, 2, 3, 4, 5, 6, 9]);

        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [5];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [5]);
    }
}
