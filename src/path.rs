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

use super::graph::Graph;

/// What happened to the path after clicking on a vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The vertex started a new path
    Started,
    /// The vertex was added to the end of the path
    Extended,
    /// The vertex was the last one in the path and got removed
    Removed,
    /// The vertex isn’t next to the last one or is already used
    Ignored,
}

/// The letters that the player has traced so far. No vertex appears
/// twice and every vertex is adjacent to the one before it.
#[derive(Debug, Clone, Default)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn select(&mut self, graph: &Graph, vertex: usize) -> Selection {
        // Resolving the node checks that the vertex is in range
        let node = graph.node(vertex);

        match self.vertices.last() {
            Some(&last) if last == vertex => {
                self.vertices.pop();
                Selection::Removed
            },
            None => {
                self.vertices.push(node.vertex);
                Selection::Started
            },
            Some(&last) => {
                if graph.is_adjacent(last, vertex)
                    && !self.vertices.contains(&vertex)
                {
                    self.vertices.push(node.vertex);
                    Selection::Extended
                } else {
                    Selection::Ignored
                }
            },
        }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// The letters of the path in uppercase
    pub fn word(&self, graph: &Graph) -> String {
        self.vertices
            .iter()
            .flat_map(|&vertex| graph.node(vertex).value.to_uppercase())
            .collect()
    }
}
