//! Dataset ingestion for the correlation engine.
//!
//! Reads a CSV file with a single header row through Polars and converts it
//! into a [`corr_model::Dataset`]. Integer and float columns become numeric;
//! everything else (strings, booleans) is non-numeric. Empty cells are
//! missing values.

mod csv;
mod error;
mod frame;

use std::path::Path;

use tracing::{info, info_span};

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_frame, validate_encoding,
};

// === Conversion ===
pub use frame::{dataset_from_frame, is_numeric_dtype};

use corr_model::Dataset;

/// Loads a CSV file into a dataset with default options.
pub fn read_csv_dataset(path: &Path) -> Result<Dataset> {
    read_csv_dataset_with(path, CsvOptions::default())
}

/// Loads a CSV file into a dataset.
pub fn read_csv_dataset_with(path: &Path, options: CsvOptions) -> Result<Dataset> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = std::time::Instant::now();

    let df = read_csv_frame(path, options)?;
    let dataset = dataset_from_frame(&df)?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        numeric_columns = dataset.numeric_column_names().len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
