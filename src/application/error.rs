use thiserror::Error;

use crate::domain::{RosterError, MEMBER_COUNT};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No member given")]
    EmptyMember,

    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Invalid amount '{0}': use a number like '50.00' or '50'")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Expected {expected} member names, got {actual}")]
    WrongMemberCount { expected: usize, actual: usize },

    #[error("Member name in slot {0} must not be empty")]
    EmptyMemberName(usize),

    #[error("Duplicate member name: {0}")]
    DuplicateMemberName(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::WrongCount(actual) => AppError::WrongMemberCount {
                expected: MEMBER_COUNT,
                actual,
            },
            RosterError::EmptyName(slot) => AppError::EmptyMemberName(slot + 1),
            RosterError::DuplicateName(name) => AppError::DuplicateMemberName(name),
        }
    }
}
