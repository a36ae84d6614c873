// src/infrastructure/snapshot_file.rs
//
// File-backed snapshot streams.
//
// PRINCIPLES:
// - The codec never opens files itself
// - Buffered streams in, buffered streams out
// - A missing file on load is an I/O error, not an empty catalog

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::AppResult;
use crate::services::CatalogService;

/// Write the catalog's extent to `path`, replacing any previous snapshot
pub fn save_to_path(catalog: &CatalogService, path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    catalog.save(BufWriter::new(file))?;
    log::info!("Snapshot written to {}", path.display());
    Ok(())
}

/// Replace the catalog's extent with the snapshot stored at `path`
pub fn load_from_path(catalog: &mut CatalogService, path: &Path) -> AppResult<usize> {
    let file = File::open(path)?;
    let count = catalog.load(BufReader::new(file))?;
    log::info!("Snapshot read from {}", path.display());
    Ok(count)
}
