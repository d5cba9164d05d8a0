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

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// The three typed fields of a rating line. The timestamp is never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserId,
    ItemId,
    Rating,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::UserId => "userID",
            Field::ItemId => "itemID",
            Field::Rating => "rating",
        };
        write!(f, "{}", name)
    }
}

/// Post-load aggregate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// More distinct users than processed lines.
    UsersExceedLines,
    /// More distinct items than processed lines.
    ItemsExceedLines,
    /// Fewer distinct users than the configured minimum.
    TooFewUsers,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Check::UsersExceedLines => "number of users is higher than number of entries",
            Check::ItemsExceedLines => "number of items is higher than number of entries",
            Check::TooFewUsers => "number of users is lower than the required minimum",
        };
        write!(f, "{}", description)
    }
}

/// Everything that can abort a load. No partial dataset is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened as a regular file: missing, unreadable or a directory.
    #[error("file not found: {}: {source}", path.display())]
    SourceNotFound { path: PathBuf, #[source] source: std::io::Error },

    #[error("expected {field} at line {line}")]
    MalformedField { line: usize, field: Field },

    #[error("{field} < 1 at line {line} (found {value})")]
    InvalidValue { line: usize, field: Field, value: i64 },

    #[error("{check}: observed {observed}, limit {limit}")]
    StructuralInconsistency { check: Check, observed: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {

    /// The 1-indexed line a per-line failure refers to.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::MalformedField { line, .. } | LoadError::InvalidValue { line, .. } => {
                Some(*line)
            },
            _ => None,
        }
    }
}
