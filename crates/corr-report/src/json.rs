//! JSON serialization of a report document.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::document::ReportDocument;
use crate::error::{ReportError, Result};

/// Serializes the whole document as pretty-printed JSON.
pub fn render_json(document: &ReportDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes the document as JSON to `path`.
pub fn write_json(document: &ReportDocument, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)?;
    Ok(())
}
