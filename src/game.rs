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
use super::board::Board;
use super::graph::Graph;
use super::path::{Path, Selection};
use super::score::{Score, SubmitOutcome};
use super::dictionary::Dictionary;

#[derive(Debug)]
pub enum DictionaryState {
    Loading,
    Ready(Dictionary),
    // Loading failed so no word will be accepted
    Failed,
}

/// Everything for one game. The frontends forward the player’s
/// clicks to [select_vertex](GameSession::select_vertex),
/// [submit_current_word](GameSession::submit_current_word) and
/// [new_game](GameSession::new_game) and then redraw from the
/// accessors.
pub struct GameSession {
    board: Board,
    graph: Graph,
    path: Path,
    score: Score,
    dictionary: DictionaryState,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> GameSession {
        GameSession::with_board(Board::generate(rng))
    }

    pub fn with_board(board: Board) -> GameSession {
        let graph = Graph::new(&board);

        GameSession {
            board,
            graph,
            path: Path::new(),
            score: Score::new(),
            dictionary: DictionaryState::Loading,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn dictionary(&self) -> &DictionaryState {
        &self.dictionary
    }

    pub fn is_dictionary_ready(&self) -> bool {
        matches!(self.dictionary, DictionaryState::Ready(_))
    }

    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = DictionaryState::Ready(dictionary);
    }

    pub fn dictionary_failed(&mut self) {
        self.dictionary = DictionaryState::Failed;
    }

    pub fn select_vertex(&mut self, vertex: usize) -> Selection {
        self.path.select(&self.graph, vertex)
    }

    pub fn current_word(&self) -> String {
        self.path.word(&self.graph)
    }

    pub fn submit_current_word(&mut self) -> SubmitOutcome {
        let word = self.current_word();

        let outcome = match &self.dictionary {
            _ if word.is_empty() => SubmitOutcome::Empty,
            DictionaryState::Loading => SubmitOutcome::NotReady,
            DictionaryState::Ready(dictionary) => {
                self.score.submit(&word, dictionary)
            },
            DictionaryState::Failed => SubmitOutcome::InvalidWord(word),
        };

        if matches!(outcome, SubmitOutcome::Accepted(_)) {
            self.path.clear();
        }

        outcome
    }

    /// Replaces the board, the selection and the score. The
    /// dictionary is kept because it only needs to be loaded once.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = Board::generate(rng);
        self.graph = Graph::new(&self.board);
        self.path.clear();
        self.score = Score::new();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::board::N_CELLS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_test_session() -> GameSession {
        let board = "CATSX\n\
                     XXXXX\n\
                     XXXXX\n\
                     XXXXX\n\
                     XXXXE".parse::<Board>().unwrap();

        let mut session = GameSession::with_board(board);
        session.set_dictionary(Dictionary::new("cat\ncats\n"));

        session
    }

    #[test]
    fn accept_word() {
        let mut session = make_test_session();

        assert_eq!(session.select_vertex(0), Selection::Started);
        assert_eq!(session.select_vertex(1), Selection::Extended);
        assert_eq!(session.select_vertex(2), Selection::Extended);
        assert_eq!(session.current_word(), "CAT");

        assert!(matches!(
            session.submit_current_word(),
            SubmitOutcome::Accepted(ref record)
                if record.word == "CAT" && record.points == 1,
        ));
        assert_eq!(session.score().total(), 1);
        assert_eq!(session.score().history().len(), 1);

        // The selection is cleared
        assert!(session.path().is_empty());
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn invalid_word() {
        let mut session = make_test_session();

        session.select_vertex(24);
        session.select_vertex(23);

        assert_eq!(
            session.submit_current_word(),
            SubmitOutcome::InvalidWord("EX".to_string()),
        );
        assert_eq!(session.score().total(), 0);
        assert!(session.score().history().is_empty());
        // The selection is kept so the player can fix it
        assert_eq!(session.current_word(), "EX");
    }

    #[test]
    fn empty_submission() {
        let mut session = make_test_session();

        assert_eq!(session.submit_current_word(), SubmitOutcome::Empty);
        assert_eq!(session.score().total(), 0);
        assert!(session.score().history().is_empty());
    }

    #[test]
    fn dictionary_not_ready() {
        let board = "CATSX\n\
                     XXXXX\n\
                     XXXXX\n\
                     XXXXX\n\
                     XXXXE".parse::<Board>().unwrap();
        let mut session = GameSession::with_board(board);

        assert!(!session.is_dictionary_ready());
        assert_eq!(session.submit_current_word(), SubmitOutcome::Empty);

        session.select_vertex(0);
        session.select_vertex(1);
        session.select_vertex(2);

        assert_eq!(session.submit_current_word(), SubmitOutcome::NotReady);
        assert_eq!(session.current_word(), "CAT");

        session.set_dictionary(Dictionary::new("cat"));
        assert!(session.is_dictionary_ready());

        assert!(matches!(
            session.submit_current_word(),
            SubmitOutcome::Accepted(_),
        ));
    }

    #[test]
    fn dictionary_failed() {
        let mut session = make_test_session();

        session.dictionary_failed();

        session.select_vertex(0);
        session.select_vertex(1);
        session.select_vertex(2);

        assert_eq!(
            session.submit_current_word(),
            SubmitOutcome::InvalidWord("CAT".to_string()),
        );
        assert_eq!(session.score().total(), 0);
    }

    #[test]
    fn deselect_restores_word() {
        let mut session = make_test_session();

        session.select_vertex(0);
        session.select_vertex(1);
        assert_eq!(session.current_word(), "CA");

        assert_eq!(session.select_vertex(2), Selection::Extended);
        assert_eq!(session.select_vertex(2), Selection::Removed);
        assert_eq!(session.current_word(), "CA");
        assert_eq!(session.path().vertices(), &[0, 1]);
    }

    #[test]
    fn new_game() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = make_test_session();

        session.select_vertex(0);
        session.select_vertex(1);
        session.select_vertex(2);
        session.select_vertex(3);
        session.submit_current_word();
        session.select_vertex(0);
        assert_eq!(session.score().total(), 1);

        session.new_game(&mut rng);

        assert_eq!(session.score().total(), 0);
        assert!(session.score().history().is_empty());
        assert!(session.path().is_empty());
        assert!(session.is_dictionary_ready());

        let graph = session.graph();
        assert_eq!(graph.nodes().len(), N_CELLS);

        for (vertex, node) in graph.nodes().iter().enumerate() {
            assert_eq!(node.vertex, vertex);
            assert_eq!(node.value, session.board().letter(vertex));

            for &other in node.connections.iter() {
                assert!(graph.is_adjacent(other, vertex));
            }
        }
    }
}
