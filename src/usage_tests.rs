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

#[cfg(test)]
mod tests {

    use std::fs::File;
    use std::io::Write;

    use crate::{Loader, LoadError};
    use crate::error::Check;
    use crate::stats::DatasetStats;

    #[test]
    fn programmatic_usage() {

        /* Our input is a MovieLens ratings file: one UserID::MovieID::Rating::Timestamp record
           per line. We write a small one with 25 users to a temporary directory. */
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.dat");

        let mut file = File::create(&path).unwrap();
        for user in 1..=25 {
            for movie in 1..=user {
                writeln!(file, "{}::{}::{}::978300760", user, movie * 3, 1 + (user + movie) % 5)
                    .unwrap();
            }
        }
        drop(file);

        /* The loader reads the file exactly once. Every line is validated, and after the last
           line all user vectors are sized to the highest movie id in the whole file. */
        let dataset = Loader::new()
            .separator("::")
            .load_path(&path)
            .unwrap();

        let stats = DatasetStats::from(&dataset);

        println!(
            "Found {} ratings between {} users and {} items.",
            stats.num_ratings,
            stats.num_users,
            stats.num_items,
        );

        assert_eq!(stats.num_users, 25);
        assert_eq!(stats.num_items, 25);
        assert_eq!(stats.num_ratings, (1..=25).sum::<usize>());
        assert_eq!(stats.min_ratings_per_user, 1);
        assert_eq!(stats.max_ratings_per_user, 25);

        /* User 1 only rated movie 3, but its vector spans all 75 movie ids. */
        let first_user = dataset.user(1).unwrap();
        assert_eq!(first_user.size(), 75);
        assert_eq!(first_user.get(3), Some(3));
        assert_eq!(first_user.get(75), None);

        for (user, ratings) in dataset.iter() {
            for (movie, rating) in ratings.iter() {
                assert_eq!(rating as usize, 1 + (user as usize + movie as usize / 3) % 5);
            }
        }
    }

    #[test]
    fn failed_loads_return_no_dataset() {

        /* Too few users: the file is parsed completely, then rejected as a whole. */
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.dat");

        let mut file = File::create(&path).unwrap();
        for user in 1..=5 {
            writeln!(file, "{}::1::5::978300760", user).unwrap();
        }
        drop(file);

        match Loader::with_file(&path, "::").load() {
            Err(LoadError::StructuralInconsistency { check: Check::TooFewUsers, .. }) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
