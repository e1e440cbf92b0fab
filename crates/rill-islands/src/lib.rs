//! Island registration from a scripts directory.
//!
//! Scans a directory of client-side island scripts and emits a loader
//! script: one conditional dynamic import per island, keyed by filename
//! without extension, so an island's code is only fetched when its element
//! actually appears in the document.

use std::fs;
use std::path::{Path, PathBuf};

use rill_markup::{Markup, Value};
use thiserror::Error;

/// Extension identifying island scripts.
const SCRIPT_EXTENSION: &str = ".js";

/// Errors raised while registering islands.
#[derive(Debug, Error)]
pub enum IslandError {
    /// The islands directory could not be read.
    #[error("could not read islands directory {}: {source}", path.display())]
    Directory {
        /// The directory that was scanned.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
}

/// Scan `dir` for island scripts and emit their loader markup.
///
/// Every file ending in `.js` becomes one entry:
/// `if (document.querySelector('name')) import('prefix/name.js');`
/// where `name` is the filename up to its first dot and `import_prefix` is
/// the URL prefix the scripts are served under. Entries are sorted by name
/// so output does not depend on directory iteration order.
///
/// A missing or unreadable directory is an error for the caller; nothing
/// is swallowed.
pub fn register_islands(
    dir: impl AsRef<Path>,
    import_prefix: &str,
) -> Result<Markup, IslandError> {
    let dir = dir.as_ref();
    let read_error = |source: std::io::Error| {
        tracing::error!(path = %dir.display(), %source, "could not read islands directory");
        IslandError::Directory {
            path: dir.to_path_buf(),
            source,
        }
    };

    let mut islands = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(island) = name.strip_suffix(SCRIPT_EXTENSION) {
            // An island like `counter.client.js` is addressed as `counter`.
            let island = island.split('.').next().unwrap_or(island);
            islands.push(island.to_string());
        }
    }
    islands.sort();

    let imports: Vec<Value> = islands
        .iter()
        .map(|island| loader_entry(island, import_prefix).into())
        .collect();

    Ok(Markup::build()
        .lit("<script>")
        .val(imports)
        .lit("</script>")
        .finish())
}

/// One conditional dynamic import.
fn loader_entry(island: &str, prefix: &str) -> Markup {
    Markup::raw(format!(
        "if(document.querySelector('{island}'))import('{prefix}{island}{SCRIPT_EXTENSION}');"
    ))
}
