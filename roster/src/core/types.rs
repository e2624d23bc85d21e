//! Outcome types shared by core roster operations and the record store.
//!
//! Not-found and invalid-criterion are ordinary outcomes, not errors: the
//! dispatcher turns each variant into a short user-facing message.

use std::fmt;
use std::str::FromStr;

/// Field used to reorder the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Name,
    Salary,
    Department,
}

impl SortCriterion {
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Name => "name",
            SortCriterion::Salary => "salary",
            SortCriterion::Department => "department",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort key, carrying the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCriterion(pub String);

impl fmt::Display for InvalidCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sort criterion '{}'", self.0)
    }
}

impl std::error::Error for InvalidCriterion {}

impl FromStr for SortCriterion {
    type Err = InvalidCriterion;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortCriterion::Name),
            "salary" => Ok(SortCriterion::Salary),
            "department" => Ok(SortCriterion::Department),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

/// Result of removing by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Number of records removed (always > 0).
    Removed(usize),
    NotFound,
}

/// Result of updating department and salary by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of a sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted(SortCriterion),
    /// Order left untouched.
    InvalidCriterion(InvalidCriterion),
}
