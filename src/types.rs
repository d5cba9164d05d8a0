/**
 * Foresee
 * Copyright (C) 2026 The Foresee developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use fnv::{FnvHashMap, FnvHashSet};

pub type UserId = u32;
pub type ItemId = u32;
pub type Rating = u32;

pub type SparseRatings = FnvHashMap<ItemId, Rating>;
pub type IdSet = FnvHashSet<u32>;

pub fn new_sparse_ratings(capacity: usize) -> SparseRatings {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}

pub fn new_id_set(capacity: usize) -> IdSet {
    FnvHashSet::with_capacity_and_hasher(capacity, Default::default())
}
