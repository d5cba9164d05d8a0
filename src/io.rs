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

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use crate::dataset::Dataset;
use crate::stats::DatasetStats;
use crate::types::{ItemId, Rating, UserId};

/// Writes to a file at `path` if one is supplied, to stdout otherwise.
fn output(path: Option<String>) -> io::Result<Box<dyn Write>> {
    let out: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    Ok(out)
}

/// Output the dataset summary as a single line of JSON.
pub fn write_stats(dataset: &Dataset, stats_path: Option<String>) -> io::Result<()> {
    let mut out = output(stats_path)?;
    write_stats_to(dataset, &mut out)
}

pub fn write_stats_to<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    let stats = DatasetStats::from(dataset);
    let stats_as_json = serde_json::to_string(&stats)?;

    write!(out, "{}\n", stats_as_json)?;
    out.flush()
}

/// Output the loaded ratings as tab-separated `user item rating` rows without headers, ordered by
/// user and item.
pub fn write_interactions(dataset: &Dataset, interactions_path: Option<String>) -> io::Result<()> {
    let out = output(interactions_path)?;
    write_interactions_to(dataset, out)
}

pub fn write_interactions_to<W: Write>(dataset: &Dataset, out: W) -> io::Result<()> {

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_writer(out);

    let mut users: Vec<UserId> = dataset.iter().map(|(user, _)| user).collect();
    users.sort();

    for user in users {
        if let Some(ratings) = dataset.user(user) {
            let mut rows: Vec<(ItemId, Rating)> = ratings.iter().collect();
            rows.sort();

            for (item, rating) in rows {
                writer.serialize((user, item, rating))?;
            }
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {

    use std::fs;

    use super::*;

    fn small_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.put(2, 10, 4);
        dataset.put(1, 20, 3);
        dataset.put(1, 10, 5);
        dataset.set_vector_size(20);
        dataset
    }

    #[test]
    fn interactions_are_sorted_and_tab_separated() {
        let mut buffer: Vec<u8> = Vec::new();
        write_interactions_to(&small_dataset(), &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "1\t10\t5\n1\t20\t3\n2\t10\t4\n");
    }

    #[test]
    fn stats_are_written_as_json_line() {
        let mut buffer: Vec<u8> = Vec::new();
        write_stats_to(&small_dataset(), &mut buffer).unwrap();

        let line = String::from_utf8(buffer).unwrap();
        assert!(line.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["num_users"], 2);
        assert_eq!(parsed["num_items"], 2);
        assert_eq!(parsed["num_ratings"], 3);
        assert_eq!(parsed["vector_size"], 20);
    }

    #[test]
    fn writes_to_file_when_path_given() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.tsv");

        write_interactions(&small_dataset(), Some(path.to_string_lossy().into_owned())).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
