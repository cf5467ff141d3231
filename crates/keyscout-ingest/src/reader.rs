//! CSV file reading.

use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::SourceInfo;

/// Default number of rows used to infer column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 100;

/// Options for reading a CSV file.
///
/// # Example
///
/// ```
/// use keyscout_ingest::ReadOptions;
///
/// let options = ReadOptions::default().with_separator(b';').with_has_header(false);
/// assert_eq!(options.separator, b';');
/// ```
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator byte.
    pub separator: u8,
    /// Whether the first row holds column names. Without a header row,
    /// columns get generated names.
    pub has_header: bool,
    /// Rows used to infer column types.
    pub infer_schema_length: usize,
    /// Cap on the number of data rows read, if any.
    pub max_rows: Option<usize>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            has_header: true,
            infer_schema_length: DEFAULT_INFER_SCHEMA_LENGTH,
            max_rows: None,
        }
    }
}

impl ReadOptions {
    /// Sets the field separator.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets whether the first row holds column names.
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the number of rows used for schema inference.
    pub fn with_infer_schema_length(mut self, rows: usize) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Caps the number of data rows read.
    pub fn with_max_rows(mut self, rows: Option<usize>) -> Self {
        self.max_rows = rows;
        self
    }
}

/// A parsed CSV table together with its provenance.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// The parsed frame.
    pub frame: DataFrame,
    /// Identity of the file the frame came from.
    pub source: SourceInfo,
}

/// Reads a CSV file into a DataFrame, capturing provenance.
///
/// A file that exists but holds no bytes at all fails with
/// [`IngestError::EmptyCsv`]; a header-only file parses into a frame with
/// zero rows and is left for the caller to judge.
pub fn read_csv_table(path: &Path, options: &ReadOptions) -> Result<CsvTable> {
    let frame = read_frame(path, options)?;
    let source = SourceInfo::capture(path, &frame)?;

    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        sha256 = %source.sha256,
        "read csv table"
    );

    Ok(CsvTable { frame, source })
}

/// Reads just the column names of a CSV file.
///
/// Parses the header through the same code path as a full read but
/// materializes no data rows.
pub fn read_csv_header(path: &Path, options: &ReadOptions) -> Result<Vec<String>> {
    let peek = options.clone().with_max_rows(Some(0));
    let frame = read_frame(path, &peek)?;
    Ok(frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect())
}

fn read_frame(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let parse_options = CsvParseOptions::default().with_separator(options.separator);

    CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(Some(options.infer_schema_length))
        .with_n_rows(options.max_rows)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_basic() {
        let file = create_temp_csv("id,name\n1,ana\n2,bob\n3,cyd\n");
        let table = read_csv_table(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(table.frame.height(), 3);
        assert_eq!(table.frame.width(), 2);
        assert_eq!(table.source.rows, 3);
        assert_eq!(table.source.columns, 2);
        assert!(!table.source.sha256.is_empty());
    }

    #[test]
    fn test_read_csv_table_with_separator() {
        let file = create_temp_csv("id;name\n1;ana\n2;bob\n");
        let options = ReadOptions::default().with_separator(b';');
        let table = read_csv_table(file.path(), &options).unwrap();

        assert_eq!(table.frame.width(), 2);
        assert_eq!(table.frame.height(), 2);
    }

    #[test]
    fn test_read_csv_table_without_header() {
        let file = create_temp_csv("1,ana\n2,bob\n");
        let options = ReadOptions::default().with_has_header(false);
        let table = read_csv_table(file.path(), &options).unwrap();

        // Every line is data when there is no header row
        assert_eq!(table.frame.height(), 2);
        assert_eq!(table.frame.width(), 2);
    }

    #[test]
    fn test_read_csv_table_row_cap() {
        let file = create_temp_csv("id\n1\n2\n3\n4\n5\n");
        let options = ReadOptions::default().with_max_rows(Some(2));
        let table = read_csv_table(file.path(), &options).unwrap();

        assert_eq!(table.frame.height(), 2);
    }

    #[test]
    fn test_read_csv_header_lists_columns_in_order() {
        let file = create_temp_csv("z,a,m\n1,2,3\n");
        let columns = read_csv_header(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(columns, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(Path::new("/no/such/file.csv"), &ReadOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_zero_byte_file() {
        let file = NamedTempFile::new().unwrap();
        let result = read_csv_table(file.path(), &ReadOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_header_only_file_parses_with_zero_rows() {
        let file = create_temp_csv("id,name\n");
        let table = read_csv_table(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(table.frame.height(), 0);
        assert_eq!(table.frame.width(), 2);
    }
}
