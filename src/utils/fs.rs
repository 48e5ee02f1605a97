//! File system utilities.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating parents as needed.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
