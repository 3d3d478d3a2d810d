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

use wasm_bindgen::prelude::*;
use web_sys::console;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use super::board::{BOARD_SIZE, N_CELLS};
use super::dictionary::Dictionary;
use super::game::GameSession;
use super::path::Selection;
use super::score::SubmitOutcome;

const DICTIONARY_FILENAME: &str = "words.txt";

fn show_error(message: &str) {
    console::log_1(&message.into());

    let Some(window) = web_sys::window()
    else {
        return;
    };

    let Some(document) = window.document()
    else {
        return;
    };

    let Some(message_elem) = document.get_element_by_id("message")
    else {
        return;
    };

    message_elem.set_text_content(Some("An error occurred"));
}

struct Context {
    document: web_sys::Document,
    window: web_sys::Window,
    message: web_sys::HtmlElement,
}

impl Context {
    fn new() -> Result<Context, String> {
        let Some(window) = web_sys::window()
        else {
            return Err("failed to get window".to_string());
        };

        let Some(document) = window.document()
        else {
            return Err("failed to get document".to_string());
        };

        let message = get_html_element(&document, "message")?;

        Ok(Context {
            document,
            window,
            message,
        })
    }
}

fn get_html_element(
    document: &web_sys::Document,
    id: &str,
) -> Result<web_sys::HtmlElement, String> {
    document.get_element_by_id(id)
        .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| format!("failed to get {} element", id))
}

type PromiseClosure = Closure::<dyn FnMut(JsValue)>;
type EventClosure = Closure::<dyn FnMut(web_sys::Event)>;

struct Boggle {
    context: Context,
    session: GameSession,
    rng: SmallRng,

    dice: Vec<web_sys::HtmlElement>,
    current_word: web_sys::HtmlElement,
    score_board: web_sys::HtmlElement,
    total_points: web_sys::HtmlElement,

    event_closures: Vec<EventClosure>,

    data_response_closure: Option<PromiseClosure>,
    data_content_closure: Option<PromiseClosure>,
    data_error_closure: Option<PromiseClosure>,
}

impl Boggle {
    fn new(context: Context) -> Result<Box<Boggle>, String> {
        let board = get_html_element(&context.document, "boggle-board")?;
        let current_word =
            get_html_element(&context.document, "current-word-value")?;
        let score_board = get_html_element(&context.document, "score-board")?;
        let total_points =
            get_html_element(&context.document, "total-points")?;

        let mut dice = Vec::with_capacity(N_CELLS);

        for vertex in 0..N_CELLS {
            let Some(element) = context.document.create_element("div").ok()
                .and_then(|c| c.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return Err("failed to create die element".to_string());
            };

            let _ = element.set_attribute("class", "dice-container");
            let _ = element.set_attribute("data-id", &vertex.to_string());

            let _ = element.style().set_property(
                "grid-area",
                &format!(
                    "{} / {} / {} / {}",
                    vertex / BOARD_SIZE + 1,
                    vertex % BOARD_SIZE + 1,
                    vertex / BOARD_SIZE + 2,
                    vertex % BOARD_SIZE + 2,
                ),
            );

            let _ = board.append_with_node_1(&element);

            dice.push(element);
        }

        let _ = context.message.style().set_property("display", "none");
        let _ = board.style().set_property("display", "grid");

        // Math.random is good enough to pick a board
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);
        let session = GameSession::new(&mut rng);

        let boggle = Boggle {
            context,
            session,
            rng,
            dice,
            current_word,
            score_board,
            total_points,
            event_closures: Vec::new(),
            data_response_closure: None,
            data_content_closure: None,
            data_error_closure: None,
        };

        boggle.update_die_letters();
        boggle.update_die_states();
        boggle.update_current_word();
        boggle.update_score_board();

        Ok(Box::new(boggle))
    }

    fn add_click_handler<F>(
        &mut self,
        target: &web_sys::EventTarget,
        handler: F,
    ) where
        F: FnMut(web_sys::Event) + 'static
    {
        let closure = EventClosure::new(handler);

        let _ = target.add_event_listener_with_callback(
            "click",
            closure.as_ref().unchecked_ref(),
        );

        self.event_closures.push(closure);
    }

    fn connect_handlers(&mut self, boggle: *mut Boggle) -> Result<(), String> {
        for vertex in 0..N_CELLS {
            let die = self.dice[vertex].clone();

            self.add_click_handler(&die, move |_| {
                unsafe {
                    (*boggle).die_clicked(vertex);
                }
            });
        }

        let submit = get_html_element(&self.context.document, "btn-submit")?;

        self.add_click_handler(&submit, move |_| {
            unsafe {
                (*boggle).submit_clicked();
            }
        });

        let new_game =
            get_html_element(&self.context.document, "btn-new-game")?;

        self.add_click_handler(&new_game, move |_| {
            unsafe {
                (*boggle).new_game_clicked();
            }
        });

        Ok(())
    }

    fn queue_dictionary_load(&mut self, boggle: *mut Boggle) {
        let response_closure = PromiseClosure::new(move |v: JsValue| {
            let Ok(response) = v.dyn_into::<web_sys::Response>()
            else {
                unsafe {
                    (*boggle).dictionary_failed("unexpected fetch result");
                }
                return;
            };

            if !response.ok() {
                unsafe {
                    (*boggle).dictionary_failed(&format!(
                        "HTTP status {}",
                        response.status(),
                    ));
                }
                return;
            }

            let promise = match response.text() {
                Ok(p) => p,
                Err(_) => {
                    unsafe {
                        (*boggle).dictionary_failed(
                            "error fetching text from response"
                        );
                    }
                    return;
                },
            };

            let (content_closure, error_closure) = unsafe {
                (
                    (*boggle).data_content_closure.as_ref().unwrap(),
                    (*boggle).data_error_closure.as_ref().unwrap(),
                )
            };

            let _ = promise.then2(content_closure, error_closure);
        });

        let content_closure = PromiseClosure::new(move |v: JsValue| {
            unsafe {
                match v.as_string() {
                    Some(text) => (*boggle).dictionary_loaded(&text),
                    None => (*boggle).dictionary_failed("word list isn’t text"),
                }
            }
        });

        let error_closure = PromiseClosure::new(move |_| {
            unsafe {
                (*boggle).dictionary_failed("error loading data");
            }
        });

        let promise = self.context.window.fetch_with_str(DICTIONARY_FILENAME);

        let _ = promise.then2(&response_closure, &error_closure);

        self.data_response_closure = Some(response_closure);
        self.data_content_closure = Some(content_closure);
        self.data_error_closure = Some(error_closure);
    }

    fn dictionary_loaded(&mut self, text: &str) {
        let dictionary = Dictionary::new(text);

        console::log_1(&format!(
            "{}: loaded {} words",
            DICTIONARY_FILENAME,
            dictionary.len(),
        ).into());

        self.session.set_dictionary(dictionary);
    }

    // The game carries on but no words will be accepted
    fn dictionary_failed(&mut self, message: &str) {
        console::log_1(&format!("{}: {}", DICTIONARY_FILENAME, message).into());

        self.session.dictionary_failed();
    }

    fn update_die_letters(&self) {
        for (element, node) in self
            .dice
            .iter()
            .zip(self.session.graph().nodes().iter())
        {
            while let Some(child) = element.first_child() {
                let _ = element.remove_child(&child);
            }

            let letter_text = node.value.to_uppercase().collect::<String>();

            let text = self.context.document.create_text_node(&letter_text);
            let _ = element.append_with_node_1(&text);
        }
    }

    fn update_die_states(&self) {
        let path = self.session.path();

        for (vertex, element) in self.dice.iter().enumerate() {
            let _ = element.set_attribute(
                "class",
                if path.contains(vertex) {
                    "dice-container selected"
                } else {
                    "dice-container"
                },
            );
        }
    }

    fn update_current_word(&self) {
        self.current_word.set_text_content(
            Some(&self.session.current_word())
        );
    }

    fn update_score_board(&self) {
        while let Some(child) = self.score_board.first_child() {
            let _ = self.score_board.remove_child(&child);
        }

        let score = self.session.score();

        for record in score.history() {
            let Ok(row) = self.context.document.create_element("div")
            else {
                continue;
            };

            let _ = row.set_attribute("class", "word-points");
            row.set_text_content(Some(&format!(
                "{} {}",
                record.word,
                record.points,
            )));

            let _ = self.score_board.append_with_node_1(&row);
        }

        self.total_points.set_text_content(
            Some(&score.total().to_string())
        );
    }

    fn die_clicked(&mut self, vertex: usize) {
        if self.session.select_vertex(vertex) == Selection::Ignored {
            return;
        }

        self.update_die_states();
        self.update_current_word();
    }

    fn submit_clicked(&mut self) {
        match self.session.submit_current_word() {
            SubmitOutcome::Empty => return,
            SubmitOutcome::NotReady => {
                let _ = self.context.window.alert_with_message(
                    "The dictionary is still loading"
                );
                return;
            },
            SubmitOutcome::InvalidWord(word) => {
                let _ = self.context.window.alert_with_message(
                    &format!("Invalid Word: {}", word)
                );
                return;
            },
            SubmitOutcome::Accepted(_) => (),
        }

        self.update_score_board();
        self.update_die_states();
        self.update_current_word();
    }

    fn new_game_clicked(&mut self) {
        self.session.new_game(&mut self.rng);

        self.update_die_letters();
        self.update_die_states();
        self.update_current_word();
        self.update_score_board();
    }
}

#[wasm_bindgen]
pub fn init_boggle() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let context = match Context::new() {
        Ok(c) => c,
        Err(e) => {
            show_error(&e);
            return;
        }
    };

    let boggle = match Boggle::new(context) {
        Ok(b) => b,
        Err(e) => {
            show_error(&e);
            return;
        },
    };

    // Leak the main boggle object so that it will live as long as
    // the web page. The event handlers keep a pointer to it.
    let boggle = Box::into_raw(boggle);

    unsafe {
        if let Err(e) = (*boggle).connect_handlers(boggle) {
            show_error(&e);
            return;
        }

        (*boggle).queue_dictionary_load(boggle);
    }
}
