use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of roster slots. Every household tracked by the ledger has
/// exactly five members.
pub const MEMBER_COUNT: usize = 5;

/// Placeholder used when a stored roster slot is blank.
const FALLBACK_NAME: &str = "Member";

/// The order-significant 5-slot member roster. Slot positions matter:
/// they are what maps old expenses to renamed members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Default for Roster {
    fn default() -> Self {
        Roster(
            ["Alice", "Bob", "Charlie", "David", "Eve"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

impl Roster {
    /// Validate user-supplied names into a roster. Names are trimmed;
    /// all five slots must be non-empty and case-insensitively distinct.
    pub fn parse(names: Vec<String>) -> Result<Self, RosterError> {
        if names.len() != MEMBER_COUNT {
            return Err(RosterError::WrongCount(names.len()));
        }

        let trimmed: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();

        for (slot, name) in trimmed.iter().enumerate() {
            if name.is_empty() {
                return Err(RosterError::EmptyName(slot));
            }
        }

        let mut seen = HashSet::new();
        for name in &trimmed {
            if !seen.insert(name.to_lowercase()) {
                return Err(RosterError::DuplicateName(name.clone()));
            }
        }

        Ok(Roster(trimmed))
    }

    /// Rebuild a roster from a stored document without the `parse`
    /// validation: slots are trimmed and blank slots become the
    /// placeholder name. A document of the wrong length is rejected.
    pub fn from_stored(names: Vec<String>) -> Option<Self> {
        if names.len() != MEMBER_COUNT {
            return None;
        }

        Some(Roster(
            names
                .into_iter()
                .map(|n| {
                    let trimmed = n.trim().to_string();
                    if trimmed.is_empty() {
                        FALLBACK_NAME.to_string()
                    } else {
                        trimmed
                    }
                })
                .collect(),
        ))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact-match membership test (renames match expenses the same way).
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Slot index of a name, matched exactly.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    WrongCount(usize),
    EmptyName(usize),
    DuplicateName(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::WrongCount(count) => {
                write!(f, "expected {} member names, got {}", MEMBER_COUNT, count)
            }
            RosterError::EmptyName(slot) => {
                write!(f, "member name in slot {} is empty", slot + 1)
            }
            RosterError::DuplicateName(name) => {
                write!(f, "duplicate member name: {}", name)
            }
        }
    }
}

impl std::error::Error for RosterError {}
