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
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::error::{Check, Field, LoadError, LoadResult};
use crate::types::{ItemId, Rating, UserId};
use crate::utils;

pub const DEFAULT_SEPARATOR: &str = "::";

/// Every MovieLens user has rated at least 20 movies, smaller files are not considered a dataset.
pub const DEFAULT_MIN_USERS: usize = 20;

/// Loads rating files of the form `UserID::MovieID::Rating::Timestamp`.
///
/// * UserIDs and MovieIDs start at 1
/// * Ratings are whole numbers, usually on a 5-star scale (the upper bound is not checked)
/// * The timestamp is discarded
///
/// After all lines are read, the vector of every user is sized to the highest item id found in
/// the whole file.
#[derive(Debug, Clone)]
pub struct Loader {
    separator: String,
    min_users: usize,
    dataset_file: Option<PathBuf>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new()
    }
}

impl Loader {

    pub fn new() -> Self {
        Loader {
            separator: DEFAULT_SEPARATOR.to_string(),
            min_users: DEFAULT_MIN_USERS,
            dataset_file: None,
        }
    }

    /// A loader bound to a file, to be read later via `load`.
    pub fn with_file<P: AsRef<Path>>(dataset_file: P, separator: &str) -> Self {
        Loader::new()
            .separator(separator)
            .dataset_file(dataset_file)
    }

    /// Falls back to the default separator if `separator` is empty.
    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = if separator.is_empty() {
            DEFAULT_SEPARATOR.to_string()
        } else {
            separator.to_string()
        };
        self
    }

    pub fn min_users(mut self, min_users: usize) -> Self {
        self.min_users = min_users;
        self
    }

    pub fn dataset_file<P: AsRef<Path>>(mut self, dataset_file: P) -> Self {
        self.dataset_file = Some(dataset_file.as_ref().to_path_buf());
        self
    }

    pub fn get_separator(&self) -> &str {
        &self.separator
    }

    pub fn get_dataset_file(&self) -> Option<&Path> {
        self.dataset_file.as_ref().map(|path| path.as_path())
    }

    /// Loads the file this loader was bound to.
    pub fn load(&self) -> LoadResult<Dataset> {
        match self.dataset_file {
            Some(ref path) => self.load_path(path),
            None => Err(LoadError::SourceNotFound {
                path: PathBuf::new(),
                source: io::Error::new(io::ErrorKind::NotFound, "no dataset file configured"),
            }),
        }
    }

    /// Opens `path` and loads it. The file is closed again on every exit path.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> LoadResult<Dataset> {
        let path = path.as_ref();

        let not_found = |source| LoadError::SourceNotFound { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(not_found)?;

        // Opening a directory succeeds on some platforms, reading it never does
        if file.metadata().map_err(not_found)?.is_dir() {
            return Err(not_found(io::Error::new(io::ErrorKind::Other, "is a directory")));
        }

        debug!("Reading ratings from {} (separator '{}')", path.display(), self.separator);

        self.load_reader(BufReader::new(file))
    }

    /// Single pass over `reader`. The first invalid line aborts the load.
    ///
    /// Lines are read as raw bytes, so invalid UTF-8 surfaces as a malformed field of that line
    /// rather than as an I/O error.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> LoadResult<Dataset> {

        let load_start = Instant::now();

        let mut dataset = Dataset::new();
        let mut highest_item: ItemId = 0;
        let mut num_lines: usize = 0;

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            let line_number = index + 1;

            let (user, item, rating) = self.parse_line(&line, line_number)?;

            highest_item = cmp::max(highest_item, item);
            dataset.put(user, item, rating);

            num_lines = line_number;
        }

        self.check_structure(&dataset, num_lines)?;

        dataset.set_vector_size(highest_item as usize);

        info!(
            "Loaded {} ratings from {} users on {} items, vector size {}, {}ms",
            dataset.num_ratings(),
            dataset.users_count(),
            dataset.items_count(),
            dataset.vector_size(),
            utils::to_millis(load_start.elapsed()),
        );

        Ok(dataset)
    }

    fn parse_line(&self, line: &str, line_number: usize) -> LoadResult<(UserId, ItemId, Rating)> {
        let mut tokens = line.split(self.separator.as_str());

        let user = next_int(&mut tokens, Field::UserId, line_number)?;
        let item = next_int(&mut tokens, Field::ItemId, line_number)?;
        let rating = next_int(&mut tokens, Field::Rating, line_number)?;

        Ok((
            positive(user, Field::UserId, line_number)?,
            positive(item, Field::ItemId, line_number)?,
            positive(rating, Field::Rating, line_number)?,
        ))
    }

    fn check_structure(&self, dataset: &Dataset, num_lines: usize) -> LoadResult<()> {

        let num_users = dataset.users_count();
        let num_items = dataset.items_count();

        let checks = [
            (Check::UsersExceedLines, num_users > num_lines, num_users, num_lines),
            (Check::ItemsExceedLines, num_items > num_lines, num_items, num_lines),
            (Check::TooFewUsers, num_users < self.min_users, num_users, self.min_users),
        ];

        for &(check, failed, observed, limit) in checks.iter() {
            if failed {
                warn!("Rejecting dataset after {} lines: {}", num_lines, check);
                return Err(LoadError::StructuralInconsistency { check, observed, limit });
            }
        }

        Ok(())
    }
}

/// Loads `path` with the default separator and user minimum.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> LoadResult<Dataset> {
    Loader::new().load_path(path)
}

fn next_int<'a, I>(tokens: &mut I, field: Field, line: usize) -> LoadResult<i32>
    where I: Iterator<Item=&'a str> {

    tokens.next()
        .and_then(|token| token.trim().parse::<i32>().ok())
        .ok_or(LoadError::MalformedField { line, field })
}

fn positive(value: i32, field: Field, line: usize) -> LoadResult<u32> {
    if value < 1 {
        Err(LoadError::InvalidValue { line, field, value: value as i64 })
    } else {
        Ok(value as u32)
    }
}
