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

use std::cmp;

use fnv::FnvHashMap;

use crate::types::{self, IdSet, ItemId, Rating, SparseRatings, UserId};

/// Ratings of a single user, keyed by item id. The logical size can exceed the number of stored
/// entries, absent indices mean "not rated".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingVector {
    size: usize,
    max_index: usize,
    ratings: SparseRatings,
}

impl RatingVector {

    pub fn with_size(size: usize) -> Self {
        RatingVector { size, max_index: 0, ratings: types::new_sparse_ratings(20) }
    }

    /// Stores a rating, growing the logical size if the item lies beyond it.
    pub fn put(&mut self, item: ItemId, rating: Rating) {
        let index = item as usize;
        self.max_index = cmp::max(self.max_index, index);
        self.size = cmp::max(self.size, index);
        self.ratings.insert(item, rating);
    }

    pub fn get(&self, item: ItemId) -> Option<Rating> {
        self.ratings.get(&item).cloned()
    }

    /// Sets the addressable size without touching the stored entries. The size never drops below
    /// the highest stored item id.
    pub fn set_size(&mut self, size: usize) {
        self.size = cmp::max(size, self.max_index);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_ratings(&self) -> usize {
        self.ratings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=(ItemId, Rating)> + '_ {
        self.ratings.iter().map(|(item, rating)| (*item, *rating))
    }
}

/// Sparse rating store, one `RatingVector` per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    vector_size: usize,
    users: FnvHashMap<UserId, RatingVector>,
    items: IdSet,
    num_ratings: usize,
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::new()
    }
}

impl Dataset {

    pub fn new() -> Self {
        Dataset {
            vector_size: 0,
            users: FnvHashMap::with_capacity_and_hasher(100, Default::default()),
            items: types::new_id_set(100),
            num_ratings: 0,
        }
    }

    /// Inserts or overwrites the rating of `user` for `item`.
    pub fn put(&mut self, user: UserId, item: ItemId, rating: Rating) {
        let vector_size = self.vector_size;
        let ratings = self.users.entry(user)
            .or_insert_with(|| RatingVector::with_size(vector_size));

        if ratings.get(item).is_none() {
            self.num_ratings += 1;
        }
        ratings.put(item, rating);

        self.items.insert(item);
    }

    pub fn rating(&self, user: UserId, item: ItemId) -> Option<Rating> {
        self.users.get(&user).and_then(|ratings| ratings.get(item))
    }

    pub fn user(&self, user: UserId) -> Option<&RatingVector> {
        self.users.get(&user)
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// Number of distinct (user, item) pairs stored.
    pub fn num_ratings(&self) -> usize {
        self.num_ratings
    }

    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    /// Fixes the logical size of every stored vector, and of vectors created later on.
    pub fn set_vector_size(&mut self, size: usize) {
        self.vector_size = size;
        for ratings in self.users.values_mut() {
            ratings.set_size(size);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=(UserId, &RatingVector)> {
        self.users.iter().map(|(user, ratings)| (*user, ratings))
    }
}
