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

use chrono::{Datelike, NaiveDate};

/// Seed for the board of the given day so that everyone playing on
/// the same day gets the same board
pub fn seed_for_date(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}

pub fn today_seed() -> u64 {
    seed_for_date(chrono::Local::now().date_naive())
}
