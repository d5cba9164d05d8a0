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

use serde_derive::Serialize;

use crate::dataset::Dataset;

/// Summary of a loaded dataset. Field names will be used in JSON.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub num_users: usize,
    pub num_items: usize,
    pub num_ratings: usize,
    pub vector_size: usize,
    pub min_ratings_per_user: usize,
    pub max_ratings_per_user: usize,
}

impl<'a> From<&'a Dataset> for DatasetStats {

    fn from(dataset: &'a Dataset) -> Self {

        let ratings_per_user = dataset.iter().map(|(_, ratings)| ratings.num_ratings());

        let (min_ratings_per_user, max_ratings_per_user) = ratings_per_user
            .fold(None, |bounds, count| match bounds {
                None => Some((count, count)),
                Some((min, max)) => Some((min.min(count), max.max(count))),
            })
            .unwrap_or((0, 0));

        DatasetStats {
            num_users: dataset.users_count(),
            num_items: dataset.items_count(),
            num_ratings: dataset.num_ratings(),
            vector_size: dataset.vector_size(),
            min_ratings_per_user,
            max_ratings_per_user,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn summarizes_dataset() {
        let mut dataset = Dataset::new();
        dataset.put(1, 10, 5);
        dataset.put(1, 20, 3);
        dataset.put(1, 30, 1);
        dataset.put(2, 10, 4);
        dataset.set_vector_size(30);

        let stats = DatasetStats::from(&dataset);

        assert_eq!(stats, DatasetStats {
            num_users: 2,
            num_items: 3,
            num_ratings: 4,
            vector_size: 30,
            min_ratings_per_user: 1,
            max_ratings_per_user: 3,
        });
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let stats = DatasetStats::from(&Dataset::new());
        assert_eq!(stats.min_ratings_per_user, 0);
        assert_eq!(stats.max_ratings_per_user, 0);
    }
}
