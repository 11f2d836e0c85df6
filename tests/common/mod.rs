// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use roomsplit::application::SplitService;
use roomsplit::storage::{LoadWarning, Store};
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary data directory
pub fn test_service() -> Result<(SplitService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = Store::open(temp_dir.path());
    let (service, warnings) = SplitService::open(store)?;
    assert!(warnings.is_empty(), "fresh store must load without warnings");
    Ok((service, temp_dir))
}

/// Reopen a service over the same data directory, returning load warnings
pub fn reopen(temp_dir: &TempDir) -> Result<(SplitService, Vec<LoadWarning>)> {
    let store = Store::open(temp_dir.path());
    Ok(SplitService::open(store)?)
}

/// Five names as owned strings
pub fn five(names: [&str; 5]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
