//! CSV reading.

mod reader;

pub use reader::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_frame, validate_encoding,
};
