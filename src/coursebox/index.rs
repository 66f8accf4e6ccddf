//! User-facing positions.
//!
//! Listings number items from 1. Every index typed by the user is a
//! [`Position`] until it reaches a collection, where it becomes a zero-based
//! `usize` through [`Position::zero_based`].

use crate::collection::INVALID_INDEX;
use crate::error::BoxError;
use std::fmt;
use std::str::FromStr;

/// A one-based index as shown next to each listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = BoxError;

    /// Digits only. `0`, signs and anything non-numeric are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoxError::Index(INVALID_INDEX.to_string()));
        }
        s.parse::<usize>()
            .ok()
            .and_then(Position::new)
            .ok_or_else(|| BoxError::Index(INVALID_INDEX.to_string()))
    }
}

/// Parses `3,1,2` into positions, in the order given.
///
/// Empty segments (`1,,2` or a trailing comma) count as invalid indexes.
pub fn parse_position_list(s: &str) -> Result<Vec<Position>, BoxError> {
    s.split(',').map(Position::from_str).collect()
}
