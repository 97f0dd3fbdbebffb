//! File operations for the board stores
//!
//! Whole-file text read/write. A missing file reads as empty, which is how
//! both stores represent "no data yet".

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read a data file, returning empty string if not found
pub fn read_text(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Write a data file (creates parent directories as needed)
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
