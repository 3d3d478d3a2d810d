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
use super::board::{Board, BOARD_SIZE, N_CELLS};

// Offsets to the neighbours in the order that they are added to the
// connections: right, left, up, down, up-left, up-right, down-left
// and down-right.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// One cell of the board. The connections are the vertex ids of the
/// neighbouring cells so they can be resolved through the [Graph].
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub vertex: usize,
    pub value: char,
    pub connections: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
}

fn neighbours(vertex: usize) -> impl Iterator<Item = usize> {
    let x = vertex % BOARD_SIZE;
    let y = vertex / BOARD_SIZE;

    DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx).filter(|&nx| nx < BOARD_SIZE)?;
        let ny = y.checked_add_signed(dy).filter(|&ny| ny < BOARD_SIZE)?;

        Some(ny * BOARD_SIZE + nx)
    })
}

impl Graph {
    pub fn new(board: &Board) -> Graph {
        let nodes = (0..N_CELLS).map(|vertex| {
            Node {
                vertex,
                value: board.letter(vertex),
                connections: neighbours(vertex).collect(),
            }
        }).collect();

        Graph { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Panics if the vertex isn’t on the board. That can only happen
    /// if the frontend passes a bad id.
    pub fn node(&self, vertex: usize) -> &Node {
        assert!(
            vertex < N_CELLS,
            "vertex {} is out of range",
            vertex,
        );

        &self.nodes[vertex]
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.node(a).connections.contains(&b)
    }
}
