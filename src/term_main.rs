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

mod dice;
mod board;
mod graph;
mod path;
mod score;
mod dictionary;
mod game;
mod daily;

use std::process::ExitCode;
use std::path::PathBuf;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use board::BOARD_SIZE;
use dictionary::Dictionary;
use game::{GameSession, DictionaryState};
use score::SubmitOutcome;

const SELECTED_COLOR: i16 = 1;

// Each letter takes up two columns so the board isn’t squashed
const CELL_WIDTH: i32 = 2;

/// Play a game of Boggle in the terminal
#[derive(Parser)]
#[command(name = "boggle")]
struct Cli {
    /// Word list with one word per line
    #[arg(long, default_value = "words.txt")]
    dictionary: PathBuf,
    /// Seed for the random number generator
    #[arg(short, long, conflicts_with = "daily")]
    seed: Option<u64>,
    /// Start with the board of the day
    #[arg(short, long)]
    daily: bool,
}

struct Player {
    session: GameSession,
    rng: StdRng,
    should_quit: bool,
    grid_x: i32,
    grid_y: i32,
    cursor: usize,
    message: Option<String>,
}

fn addch_utf8(ch: char) {
    let mut buf = [0u8; 4];

    ncurses::addstr(ch.encode_utf8(&mut buf));
}

impl Player {
    fn new(session: GameSession, rng: StdRng) -> Player {
        Player {
            session,
            rng,
            should_quit: false,
            grid_x: 1,
            grid_y: 1,
            cursor: 0,
            message: None,
        }
    }

    fn right_side(&self) -> i32 {
        self.grid_x + BOARD_SIZE as i32 * CELL_WIDTH + 3
    }

    fn draw_board(&self) {
        let graph = self.session.graph();
        let path = self.session.path();

        for (vertex, node) in graph.nodes().iter().enumerate() {
            let x = (vertex % BOARD_SIZE) as i32 * CELL_WIDTH;
            let y = (vertex / BOARD_SIZE) as i32;

            ncurses::mv(self.grid_y + y, self.grid_x + x);

            let is_selected = path.contains(vertex);
            let is_last = path.vertices().last() == Some(&vertex);

            if is_selected {
                ncurses::attron(ncurses::COLOR_PAIR(SELECTED_COLOR));
            }
            if is_last {
                ncurses::attron(ncurses::A_BOLD());
            }

            for ch in node.value.to_uppercase() {
                addch_utf8(ch);
            }

            if is_last {
                ncurses::attroff(ncurses::A_BOLD());
            }
            if is_selected {
                ncurses::attroff(ncurses::COLOR_PAIR(SELECTED_COLOR));
            }
        }
    }

    fn draw_score(&self) {
        let right_side = self.right_side();
        let score = self.session.score();

        ncurses::mvaddstr(
            self.grid_y,
            right_side,
            &format!("Word: {}", self.session.current_word()),
        );
        ncurses::mvaddstr(
            self.grid_y + 1,
            right_side,
            &format!("Total: {}", score.total()),
        );
        ncurses::mvaddstr(self.grid_y + 3, right_side, "Words:");

        let max_y = ncurses::getmaxy(ncurses::stdscr());
        let first_y = self.grid_y + 4;
        let n_visible = (max_y - first_y).max(0) as usize;
        let history = score.history();
        // Show the most recent words if they don’t all fit
        let skip = history.len().saturating_sub(n_visible);

        for (i, record) in history.iter().skip(skip).enumerate() {
            ncurses::mvaddstr(
                first_y + i as i32,
                right_side,
                &format!("{} {}", record.word, record.points),
            );
        }
    }

    fn status_text(&self) -> Option<&str> {
        if self.message.is_some() {
            return self.message.as_deref();
        }

        match self.session.dictionary() {
            DictionaryState::Ready(_) => None,
            DictionaryState::Loading => Some("Loading dictionary…"),
            DictionaryState::Failed => {
                Some("The dictionary couldn’t be loaded")
            },
        }
    }

    fn redraw(&self) {
        ncurses::clear();

        self.draw_board();
        self.draw_score();

        let y = self.grid_y + BOARD_SIZE as i32 + 1;

        if let Some(text) = self.status_text() {
            ncurses::mvaddstr(y, self.grid_x, text);
        }

        ncurses::mvaddstr(
            y + 2,
            self.grid_x,
            "Space: select  Enter: submit  ^N: new game  ^C: quit",
        );

        self.position_cursor();

        ncurses::refresh();
    }

    fn position_cursor(&self) {
        ncurses::mv(
            self.grid_y + (self.cursor / BOARD_SIZE) as i32,
            self.grid_x + (self.cursor % BOARD_SIZE) as i32 * CELL_WIDTH,
        );
    }

    fn move_cursor(&mut self, x_offset: isize, y_offset: isize) {
        let x = (self.cursor % BOARD_SIZE).checked_add_signed(x_offset);
        let y = (self.cursor / BOARD_SIZE).checked_add_signed(y_offset);

        if let (Some(x), Some(y)) = (x, y) {
            if x < BOARD_SIZE && y < BOARD_SIZE {
                self.cursor = y * BOARD_SIZE + x;
                self.redraw();
            }
        }
    }

    fn select(&mut self) {
        // Clicks that break the rules are just ignored
        self.session.select_vertex(self.cursor);
        self.redraw();
    }

    fn submit(&mut self) {
        match self.session.submit_current_word() {
            SubmitOutcome::Empty | SubmitOutcome::Accepted(_) => (),
            SubmitOutcome::NotReady => {
                self.message = Some("The dictionary isn’t ready".to_string());
            },
            SubmitOutcome::InvalidWord(word) => {
                ncurses::beep();
                self.message = Some(format!("Invalid Word: {}", word));
            },
        }

        self.redraw();
    }

    fn new_game(&mut self) {
        self.session.new_game(&mut self.rng);
        self.cursor = 0;
        self.redraw();
    }

    fn handle_key_code(&mut self, key: i32) {
        match key {
            ncurses::KEY_UP => self.move_cursor(0, -1),
            ncurses::KEY_DOWN => self.move_cursor(0, 1),
            ncurses::KEY_LEFT => self.move_cursor(-1, 0),
            ncurses::KEY_RIGHT => self.move_cursor(1, 0),
            ncurses::KEY_ENTER => self.submit(),
            ncurses::KEY_RESIZE => self.redraw(),
            _ => (),
        }
    }

    fn handle_char(&mut self, ch: ncurses::winttype) {
        if let Some(ch) = char::from_u32(ch as u32) {
            match ch {
                ' ' => self.select(),
                '\n' | '\r' => self.submit(),
                '\u{0003}' | '\u{001b}' => self.should_quit = true, // Ctrl+C
                '\u{000e}' => self.new_game(), // Ctrl+N
                _ => (),
            }
        }
    }

    fn handle_key(&mut self, key: ncurses::WchResult) {
        // Notices stay up until the next key press
        if self.message.take().is_some() {
            self.redraw();
        }

        match key {
            ncurses::WchResult::KeyCode(code) => self.handle_key_code(code),
            ncurses::WchResult::Char(ch) => self.handle_char(ch),
        }
    }
}

fn make_rng(cli: &Cli) -> StdRng {
    if cli.daily {
        StdRng::seed_from_u64(daily::today_seed())
    } else if let Some(seed) = cli.seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

fn main_loop(player: &mut Player) {
    while !player.should_quit {
        match ncurses::get_wch() {
            Some(key) => player.handle_key(key),
            None => break,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    gettextrs::setlocale(gettextrs::LocaleCategory::LcAll, "");

    let mut rng = make_rng(&cli);
    let mut session = GameSession::new(&mut rng);

    // A missing dictionary isn’t fatal, every word will just be
    // rejected
    match Dictionary::load(&cli.dictionary) {
        Ok(dictionary) => session.set_dictionary(dictionary),
        Err(e) => {
            eprintln!("{}: {}", cli.dictionary.to_string_lossy(), e);
            session.dictionary_failed();
        },
    }

    ncurses::initscr();
    ncurses::raw();
    ncurses::noecho();
    ncurses::keypad(ncurses::stdscr(), true);
    ncurses::start_color();

    ncurses::init_pair(
        SELECTED_COLOR,
        ncurses::COLOR_BLACK,
        ncurses::COLOR_YELLOW,
    );

    let mut player = Player::new(session, rng);

    player.redraw();

    main_loop(&mut player);

    ncurses::endwin();

    ExitCode::SUCCESS
}
