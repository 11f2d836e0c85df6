use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{Expense, Roster, MEMBER_COUNT};

/// Document holding the roster (array of 5 strings).
pub const MEMBERS_FILE: &str = "members.json";

/// Document holding the expense log (array of expense records).
pub const EXPENSES_FILE: &str = "expenses.json";

/// A document that could not be loaded and fell back to its default.
/// Defaults are still used so existing behavior stays reproducible, but
/// the fallback is reported instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    MembersReset { reason: String },
    ExpensesReset { reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MembersReset { reason } => {
                write!(f, "member list reset to defaults: {}", reason)
            }
            LoadWarning::ExpensesReset { reason } => {
                write!(f, "expense log reset to empty: {}", reason)
            }
        }
    }
}

/// Store for the two ledger documents. The filesystem plays the role of
/// a key-value store: one file per document, whole-document reads and
/// writes, last writer wins.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn members_path(&self) -> PathBuf {
        self.dir.join(MEMBERS_FILE)
    }

    fn expenses_path(&self) -> PathBuf {
        self.dir.join(EXPENSES_FILE)
    }

    /// Load the roster document. A missing file is a fresh start and
    /// loads the default roster silently; anything unreadable or of the
    /// wrong shape loads the default roster with a warning.
    pub fn load_members(&self) -> Result<(Roster, Option<LoadWarning>)> {
        let path = self.members_path();
        let raw = match read_if_exists(&path)? {
            Some(raw) => raw,
            None => return Ok((Roster::default(), None)),
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(names) => match Roster::from_stored(names) {
                Some(roster) => Ok((roster, None)),
                None => Ok((
                    Roster::default(),
                    Some(LoadWarning::MembersReset {
                        reason: format!(
                            "{} does not hold exactly {} names",
                            path.display(),
                            MEMBER_COUNT
                        ),
                    }),
                )),
            },
            Err(err) => Ok((
                Roster::default(),
                Some(LoadWarning::MembersReset {
                    reason: format!("{}: {}", path.display(), err),
                }),
            )),
        }
    }

    /// Load the expense document. Missing file loads empty silently;
    /// unreadable JSON or a non-array loads empty with a warning.
    pub fn load_expenses(&self) -> Result<(Vec<Expense>, Option<LoadWarning>)> {
        let path = self.expenses_path();
        let raw = match read_if_exists(&path)? {
            Some(raw) => raw,
            None => return Ok((Vec::new(), None)),
        };

        match serde_json::from_str::<Vec<Expense>>(&raw) {
            Ok(expenses) => Ok((expenses, None)),
            Err(err) => Ok((
                Vec::new(),
                Some(LoadWarning::ExpensesReset {
                    reason: format!("{}: {}", path.display(), err),
                }),
            )),
        }
    }

    pub fn save_members(&self, roster: &Roster) -> Result<()> {
        self.write_document(&self.members_path(), roster)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.write_document(&self.expenses_path(), &expenses)
    }

    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to encode {}", path.display()))?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
    }
}
